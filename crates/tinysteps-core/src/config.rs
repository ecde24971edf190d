use crate::links::{LinkBuilder, DEFAULT_MARKETPLACE_URL, DEFAULT_SEARCH_SUFFIX, DEFAULT_SHARE_BASE_URL};
use crate::shopping::{ClassicList, CLASSIC_ITEMS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
///
/// Loaded from the config file, then overridden by CLI flags.
/// Priority: CLI > File > Defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub shopping: ShoppingConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

impl Config {
    /// Load config from the default location, or defaults if there is none
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            debug!("Reading config from {}", path.display());
            let contents = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)
                .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> crate::Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// `<config dir>/tinysteps/config.toml`
    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("tinysteps");

        Ok(config_dir.join("config.toml"))
    }

    pub fn link_builder(&self) -> LinkBuilder {
        LinkBuilder::new(
            self.shopping.marketplace_url.clone(),
            self.shopping.search_suffix.clone(),
            self.share.base_url.clone(),
        )
    }

    pub fn classic_list(&self) -> ClassicList {
        ClassicList::new(&self.shopping.classic_items)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DataConfig {
    /// External catalog JSON; the built-in catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Theme name (Daylight, Nightlight, Meadow)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Enable mouse capture in the TUI
    #[serde(default = "default_mouse")]
    pub mouse_enabled: bool,
}

fn default_theme() -> String {
    "Daylight".to_string()
}

fn default_mouse() -> bool {
    false
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            mouse_enabled: default_mouse(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingConfig {
    /// Marketplace search endpoint; the item goes in the `k` parameter
    #[serde(default = "default_marketplace_url")]
    pub marketplace_url: String,

    /// Word appended to every marketplace search
    #[serde(default = "default_search_suffix")]
    pub search_suffix: String,

    /// Names that mark an item as a Montessori classic
    #[serde(default = "default_classic_items")]
    pub classic_items: Vec<String>,
}

fn default_marketplace_url() -> String {
    DEFAULT_MARKETPLACE_URL.to_string()
}

fn default_search_suffix() -> String {
    DEFAULT_SEARCH_SUFFIX.to_string()
}

fn default_classic_items() -> Vec<String> {
    CLASSIC_ITEMS.iter().map(|s| s.to_string()).collect()
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            marketplace_url: default_marketplace_url(),
            search_suffix: default_search_suffix(),
            classic_items: default_classic_items(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShareConfig {
    /// Activity links are `<base_url>/<id>`
    #[serde(default = "default_share_base_url")]
    pub base_url: String,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_share_base_url(),
        }
    }
}
