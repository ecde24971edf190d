use crate::bundles;
use crate::catalog::Catalog;
use crate::filter;
use crate::models::{Activity, AgeSelector, Bundle};
use crate::shopping::{self, ClassicList};
use tracing::debug;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Listing,
    Detail,
    ShoppingList,
    BundleBrowsing,
    ScienceInfo,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Listing => "Activities",
            ViewMode::Detail => "Activity Guide",
            ViewMode::ShoppingList => "Shopping List",
            ViewMode::BundleBrowsing => "Activity Bundles",
            ViewMode::ScienceInfo => "The Science",
        }
    }

    /// Entries of the navigation drawer, in order
    pub fn menu_entries() -> [ViewMode; 4] {
        [
            ViewMode::Listing,
            ViewMode::ShoppingList,
            ViewMode::BundleBrowsing,
            ViewMode::ScienceInfo,
        ]
    }
}

/// Selection state as seen by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub mode: ViewMode,
    /// Id of the activity shown in Detail
    pub selected_activity: Option<String>,
    pub selected_age: AgeSelector,
    pub search_query: String,
}

/// Owns the catalog and the selection state, and answers the queries the
/// screens need
///
/// Every transition is a direct response to a user action. There is no
/// timer and nothing async, so the state is always exactly what the last
/// action left behind.
#[derive(Debug, Clone)]
pub struct ViewController {
    catalog: Catalog,
    classics: ClassicList,
    state: ViewState,
}

impl ViewController {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_classics(catalog, ClassicList::default())
    }

    pub fn with_classics(catalog: Catalog, classics: ClassicList) -> Self {
        Self {
            catalog,
            classics,
            state: ViewState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn classics(&self) -> &ClassicList {
        &self.classics
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn mode(&self) -> ViewMode {
        self.state.mode
    }

    pub fn selected_age(&self) -> &AgeSelector {
        &self.state.selected_age
    }

    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    pub fn selected_activity(&self) -> Option<&Activity> {
        self.state
            .selected_activity
            .as_deref()
            .and_then(|id| self.catalog.activity(id))
    }

    /// Open an activity in Detail. Unknown ids are ignored.
    pub fn select_activity(&mut self, id: &str) -> bool {
        if self.catalog.activity(id).is_none() {
            debug!("Ignoring selection of unknown activity {}", id);
            return false;
        }
        debug!(from = ?self.state.mode, "Selecting activity {}", id);
        self.state.selected_activity = Some(id.to_string());
        self.state.mode = ViewMode::Detail;
        true
    }

    /// The "Up Next" activity for the current selection
    pub fn next_activity(&self) -> Option<&Activity> {
        let current = self.state.selected_activity.as_deref()?;
        filter::next_activity(&self.catalog.activities, current)
    }

    /// Follow the "Up Next" link from Detail
    pub fn select_next(&mut self) -> bool {
        match self.next_activity().map(|a| a.id.clone()) {
            Some(id) => self.select_activity(&id),
            None => false,
        }
    }

    /// Back to Listing, dropping the selection
    pub fn go_back(&mut self) {
        if self.state.mode != ViewMode::Listing {
            debug!(from = ?self.state.mode, "Back to listing");
        }
        self.state.mode = ViewMode::Listing;
        self.state.selected_activity = None;
    }

    pub fn set_age(&mut self, age: AgeSelector) {
        self.state.selected_age = age;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
    }

    /// Switch screens from the navigation menu
    ///
    /// Detail needs a selection, so switching to it with nothing selected
    /// is refused. Switching to Listing behaves like `go_back`.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        match mode {
            ViewMode::Detail if self.selected_activity().is_none() => {
                debug!("Refusing Detail view without a selected activity");
                false
            }
            ViewMode::Listing => {
                self.go_back();
                true
            }
            _ => {
                self.state.mode = mode;
                true
            }
        }
    }

    /// Listing contents for the current query and age
    pub fn filtered_activities(&self) -> Vec<&Activity> {
        filter::filtered_activities(
            &self.catalog.activities,
            &self.state.search_query,
            &self.state.selected_age,
        )
    }

    /// Shopping list for the current age
    pub fn shopping_items(&self, classic_only: bool) -> Vec<String> {
        shopping::shopping_list(
            &self.catalog.activities,
            &self.state.selected_age,
            classic_only,
            &self.classics,
        )
    }

    pub fn is_classic(&self, item: &str) -> bool {
        self.classics.is_classic(item)
    }

    pub fn resolve_bundle_items(&self, bundle: &Bundle) -> Vec<&Activity> {
        bundles::resolve_bundle_items(bundle, &self.catalog.activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{activity, bundle};

    fn controller() -> ViewController {
        let catalog = Catalog::new(
            vec![
                activity("1", "Watching the Munari Mobile", "0-3 Months", &["Munari Mobile"]),
                activity("2", "Building the Pink Tower", "12-18 Months", &["Pink Tower"]),
                activity("3", "Grasping the Wooden Rattle", "0-3 Months", &["Wooden Rattle"]),
            ],
            vec![bundle("b", "0-3 Months", &[1, 42, 3])],
            vec![],
        );
        ViewController::new(catalog)
    }

    #[test]
    fn test_initial_state() {
        let vc = controller();
        assert_eq!(vc.mode(), ViewMode::Listing);
        assert!(vc.selected_activity().is_none());
        assert_eq!(vc.selected_age(), &AgeSelector::All);
        assert_eq!(vc.search_query(), "");
    }

    #[test]
    fn test_select_then_back() {
        let mut vc = controller();
        assert!(vc.select_activity("2"));
        assert_eq!(vc.mode(), ViewMode::Detail);
        assert_eq!(vc.selected_activity().map(|a| a.id.as_str()), Some("2"));

        vc.go_back();
        assert_eq!(vc.mode(), ViewMode::Listing);
        assert!(vc.state().selected_activity.is_none());
    }

    #[test]
    fn test_select_unknown_is_ignored() {
        let mut vc = controller();
        assert!(!vc.select_activity("99"));
        assert_eq!(vc.mode(), ViewMode::Listing);
    }

    #[test]
    fn test_select_from_bundles() {
        let mut vc = controller();
        vc.set_view_mode(ViewMode::BundleBrowsing);
        let b = vc.catalog().bundles[0].clone();
        let first = vc.resolve_bundle_items(&b)[0].id.clone();
        assert!(vc.select_activity(&first));
        assert_eq!(vc.mode(), ViewMode::Detail);
    }

    #[test]
    fn test_back_from_every_mode_returns_to_listing() {
        for mode in [ViewMode::ShoppingList, ViewMode::BundleBrowsing, ViewMode::ScienceInfo] {
            let mut vc = controller();
            vc.select_activity("1");
            assert!(vc.set_view_mode(mode));
            vc.go_back();
            assert_eq!(vc.mode(), ViewMode::Listing);
            assert!(vc.selected_activity().is_none());
        }
    }

    #[test]
    fn test_detail_requires_selection() {
        let mut vc = controller();
        assert!(!vc.set_view_mode(ViewMode::Detail));
        assert_eq!(vc.mode(), ViewMode::Listing);
    }

    #[test]
    fn test_select_next_walks_dataset_order() {
        let mut vc = controller();
        vc.select_activity("1");
        assert!(vc.select_next());
        assert_eq!(vc.selected_activity().map(|a| a.id.as_str()), Some("2"));
        assert!(vc.select_next());
        assert!(!vc.select_next());
        assert_eq!(vc.selected_activity().map(|a| a.id.as_str()), Some("3"));
    }

    #[test]
    fn test_queries_follow_state() {
        let mut vc = controller();
        vc.set_age(AgeSelector::parse("0-3 Months"));
        assert_eq!(vc.filtered_activities().len(), 2);

        vc.set_query("rattle");
        let result = vc.filtered_activities();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "3");

        assert_eq!(vc.shopping_items(false), vec!["Munari Mobile", "Wooden Rattle"]);
        assert_eq!(vc.shopping_items(true), vec!["Munari Mobile"]);
    }

    #[test]
    fn test_age_and_query_survive_navigation() {
        let mut vc = controller();
        vc.set_age(AgeSelector::parse("0-3 Months"));
        vc.set_query("mobile");
        vc.set_view_mode(ViewMode::ShoppingList);
        vc.go_back();
        assert_eq!(vc.selected_age(), &AgeSelector::parse("0-3 Months"));
        assert_eq!(vc.search_query(), "mobile");
    }
}
