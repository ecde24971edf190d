use crate::models::AgeBand;
use serde::{Deserialize, Serialize};

/// Color theme for the TUI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// All color definitions for a theme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // UI element colors
    pub title: Color,
    pub subtitle: Color,
    pub muted: Color,
    pub selected: Color,
    pub selected_bg: Color,

    // Accents
    pub primary: Color,
    pub classic: Color,
    pub success: Color,
    pub error: Color,

    // Detail page sections
    pub safety: Color,
    pub pause: Color,

    // Age badges, youngest first
    pub age_newborn: Color,
    pub age_infant: Color,
    pub age_sitter: Color,
    pub age_crawler: Color,
    pub age_walker: Color,
    pub age_toddler: Color,
}

impl ThemeColors {
    pub fn age_badge(&self, band: AgeBand) -> Color {
        match band {
            AgeBand::Newborn => self.age_newborn,
            AgeBand::Infant => self.age_infant,
            AgeBand::Sitter => self.age_sitter,
            AgeBand::Crawler => self.age_crawler,
            AgeBand::Walker => self.age_walker,
            AgeBand::Toddler => self.age_toddler,
            AgeBand::Unknown => self.primary,
        }
    }
}

/// RGB color representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl Theme {
    /// Bright slate-and-blue theme
    pub fn daylight() -> Self {
        Self {
            name: "Daylight".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0xf8fafc),
                foreground: Color::rgb(0x1e293b),
                border: Color::rgb(0xe2e8f0),
                border_focused: Color::rgb(0x007aff),

                title: Color::rgb(0x0f172a),
                subtitle: Color::rgb(0x64748b),
                muted: Color::rgb(0x94a3b8),
                selected: Color::rgb(0x007aff),
                selected_bg: Color::rgb(0xeff6ff),

                primary: Color::rgb(0x007aff),
                classic: Color::rgb(0x4f46e5),
                success: Color::rgb(0x16a34a),
                error: Color::rgb(0xdc2626),

                safety: Color::rgb(0xb45309),
                pause: Color::rgb(0x6366f1),

                age_newborn: Color::rgb(0x3b82f6),
                age_infant: Color::rgb(0x0ea5e9),
                age_sitter: Color::rgb(0x6366f1),
                age_crawler: Color::rgb(0x8b5cf6),
                age_walker: Color::rgb(0x334155),
                age_toddler: Color::rgb(0x0f172a),
            },
        }
    }

    /// Dim theme for late-night feeds
    pub fn nightlight() -> Self {
        Self {
            name: "Nightlight".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x0f172a),
                foreground: Color::rgb(0xe2e8f0),
                border: Color::rgb(0x334155),
                border_focused: Color::rgb(0x60a5fa),

                title: Color::rgb(0xf8fafc),
                subtitle: Color::rgb(0x94a3b8),
                muted: Color::rgb(0x64748b),
                selected: Color::rgb(0x60a5fa),
                selected_bg: Color::rgb(0x1e293b),

                primary: Color::rgb(0x60a5fa),
                classic: Color::rgb(0xa5b4fc),
                success: Color::rgb(0x4ade80),
                error: Color::rgb(0xf87171),

                safety: Color::rgb(0xfbbf24),
                pause: Color::rgb(0xa5b4fc),

                age_newborn: Color::rgb(0x93c5fd),
                age_infant: Color::rgb(0x7dd3fc),
                age_sitter: Color::rgb(0xa5b4fc),
                age_crawler: Color::rgb(0xc4b5fd),
                age_walker: Color::rgb(0xcbd5e1),
                age_toddler: Color::rgb(0xf1f5f9),
            },
        }
    }

    /// Soft greens and earth tones
    pub fn meadow() -> Self {
        Self {
            name: "Meadow".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0xf6f4ee),
                foreground: Color::rgb(0x3f3a33),
                border: Color::rgb(0xd8ded1),
                border_focused: Color::rgb(0x6b8f71),

                title: Color::rgb(0x2f3e2f),
                subtitle: Color::rgb(0x7a7468),
                muted: Color::rgb(0xa59e90),
                selected: Color::rgb(0x6b8f71),
                selected_bg: Color::rgb(0xe8ede3),

                primary: Color::rgb(0x6b8f71),
                classic: Color::rgb(0x9c6644),
                success: Color::rgb(0x588157),
                error: Color::rgb(0xbc4749),

                safety: Color::rgb(0xb5651d),
                pause: Color::rgb(0x7f5539),

                age_newborn: Color::rgb(0x6b8f71),
                age_infant: Color::rgb(0x84a98c),
                age_sitter: Color::rgb(0x52796f),
                age_crawler: Color::rgb(0x9c6644),
                age_walker: Color::rgb(0x7f5539),
                age_toddler: Color::rgb(0x3f3a33),
            },
        }
    }

    /// Get all available themes
    pub fn all_themes() -> Vec<Theme> {
        vec![Self::daylight(), Self::nightlight(), Self::meadow()]
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Option<Theme> {
        Self::all_themes()
            .into_iter()
            .find(|t| t.name.to_lowercase() == name.to_lowercase())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::daylight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_conversion() {
        assert_eq!(Color::rgb(0x007aff), Color::new(0, 122, 255));
    }

    #[test]
    fn test_theme_lookup_ignores_case() {
        assert_eq!(Theme::by_name("nightlight").map(|t| t.name), Some("Nightlight".to_string()));
        assert!(Theme::by_name("Solarized").is_none());
    }

    #[test]
    fn test_unknown_age_band_uses_primary() {
        let theme = Theme::default();
        assert_eq!(theme.colors.age_badge(AgeBand::Unknown), theme.colors.primary);
        assert_eq!(theme.colors.age_badge(AgeBand::Newborn), theme.colors.age_newborn);
    }
}
