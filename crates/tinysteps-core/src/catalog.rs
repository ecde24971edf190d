use crate::models::{Activity, Book, Bundle};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// The catalog that ships inside the binary
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// The whole dataset: activities, bundles and books
///
/// Loaded once, never mutated afterwards. Everything the UI shows is a
/// view computed from this.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub bundles: Vec<Bundle>,
    #[serde(default)]
    pub books: Vec<Book>,
}

/// A bundle item whose id points at no activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRef {
    pub bundle_id: String,
    pub item_id: u32,
}

impl Catalog {
    pub fn new(activities: Vec<Activity>, bundles: Vec<Bundle>, books: Vec<Book>) -> Self {
        Self {
            activities,
            bundles,
            books,
        }
    }

    /// The built-in catalog
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load from an external JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::DatasetError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        info!("Loading catalog from {}", path.display());
        Self::from_json(&contents)
    }

    /// Load `path` if given, the embedded catalog otherwise
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::embedded(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)
            .map_err(|e| Error::DatasetError(format!("Failed to parse catalog: {}", e)))?;

        debug!(
            activities = catalog.activities.len(),
            bundles = catalog.bundles.len(),
            books = catalog.books.len(),
            "Catalog parsed"
        );

        // Input is trusted, but gaps are worth a line in the log
        for id in catalog.duplicate_ids() {
            warn!("Duplicate activity id in catalog: {}", id);
        }
        for dangling in catalog.dangling_bundle_refs() {
            warn!(
                "Bundle {} references missing activity {}",
                dangling.bundle_id, dangling.item_id
            );
        }

        Ok(catalog)
    }

    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn bundle(&self, id: &str) -> Option<&Bundle> {
        self.bundles.iter().find(|b| b.id == id)
    }

    /// Activity ids that appear more than once, in first-repeat order
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for activity in &self.activities {
            if !seen.insert(activity.id.as_str()) && !dupes.contains(&activity.id) {
                dupes.push(activity.id.clone());
            }
        }
        dupes
    }

    /// Every bundle item that does not resolve to an activity
    pub fn dangling_bundle_refs(&self) -> Vec<DanglingRef> {
        self.bundles
            .iter()
            .flat_map(|bundle| {
                bundle
                    .items
                    .iter()
                    .filter(|item| self.activity(&item.id.to_string()).is_none())
                    .map(|item| DanglingRef {
                        bundle_id: bundle.id.clone(),
                        item_id: item.id,
                    })
            })
            .collect()
    }
}
