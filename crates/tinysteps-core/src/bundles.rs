use crate::models::{Activity, AgeSelector, Bundle};
use tracing::warn;

/// Label of the "every bundle" option on the bundle age dropdown
pub const ALL_BUNDLES: &str = "All Bundles";

/// Resolve a bundle's item references to full activities, in bundle order
///
/// References are matched by the decimal rendering of their numeric id
/// against the activity's string id. Items that do not resolve are left
/// out and logged; the caller never sees an error.
pub fn resolve_bundle_items<'a>(bundle: &Bundle, activities: &'a [Activity]) -> Vec<&'a Activity> {
    bundle
        .items
        .iter()
        .filter_map(|item| {
            let id = item.id.to_string();
            let found = activities.iter().find(|a| a.id == id);
            if found.is_none() {
                warn!(
                    bundle = %bundle.id,
                    item = item.id,
                    "Skipping bundle item with no matching activity"
                );
            }
            found
        })
        .collect()
}

/// Dropdown options: "All Bundles" then each distinct age range, first-seen order
pub fn bundle_age_options(bundles: &[Bundle]) -> Vec<AgeSelector> {
    let mut options = vec![AgeSelector::All];
    for bundle in bundles {
        let sel = AgeSelector::Tag(bundle.age_range.clone());
        if !options.contains(&sel) {
            options.push(sel);
        }
    }
    options
}

/// Dropdown label for a bundle age option
pub fn bundle_age_label(age: &AgeSelector) -> &str {
    match age {
        AgeSelector::All => ALL_BUNDLES,
        AgeSelector::Tag(tag) => tag,
    }
}

/// Bundles whose age range equals the selector
pub fn filter_bundles<'a>(bundles: &'a [Bundle], age: &AgeSelector) -> Vec<&'a Bundle> {
    bundles.iter().filter(|b| age.matches(&b.age_range)).collect()
}
