// Catalog, filtering and navigation state - everything except the pixels
pub mod bundles;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod links;
pub mod models;
pub mod science;
pub mod share;
pub mod shopping;
pub mod theme;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use bundles::{bundle_age_options, filter_bundles, resolve_bundle_items};
pub use catalog::Catalog;
pub use config::Config;
pub use error::Error;
pub use export::{ExportFormat, Exporter, ShoppingExport};
pub use filter::{filtered_activities, next_activity};
pub use links::{LinkBuilder, SharePayload};
pub use models::{Activity, AgeSelector, Book, Bundle, BundleItem, Category};
pub use share::{share_or_copy, ShareOutcome};
pub use shopping::{shopping_items, shopping_list, ClassicList};
pub use theme::Theme;
pub use view::{ViewController, ViewMode, ViewState};

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
