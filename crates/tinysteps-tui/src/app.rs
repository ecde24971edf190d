// TUI application state
use ratatui::widgets::ListState;
use std::collections::HashSet;
use tinysteps_core::bundles::{bundle_age_options, filter_bundles};
use tinysteps_core::models::{Activity, AgeSelector, Bundle};
use tinysteps_core::{LinkBuilder, SharePayload, Theme, ViewController, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Navigating the current screen
    Searching, // Typing in the search box
    AgePicker, // Age dropdown open
    Menu,      // Navigation drawer open
}

/// Side effects requested by a key press, run by the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenUrl(String),
    Share(SharePayload),
}

/// One line of the bundle browser: a bundle header or one of its activities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleRow {
    Bundle { bundle_id: String },
    Activity { bundle_id: String, activity_id: String },
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub controller: ViewController,
    pub links: LinkBuilder,
    pub theme: Theme,
    // Listing
    pub selected_index: usize,
    pub list_state: ListState,
    // Dropdown / drawer cursors
    pub age_cursor: usize,
    pub menu_cursor: usize,
    // Detail
    pub detail_scroll: u16,
    // Shopping list
    pub classic_only: bool,
    pub shopping_index: usize,
    pub shopping_state: ListState,
    // Bundle browser; its age filter is separate from the main one
    pub bundle_age: AgeSelector,
    pub expanded_bundles: HashSet<String>,
    pub bundle_index: usize,
    pub bundle_state: ListState,
    // Science page
    pub science_scroll: u16,
    // Popups
    pub show_help: bool,
    pub show_philosophy: bool,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl App {
    pub fn new(controller: ViewController, links: LinkBuilder, theme: Theme) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        let mut shopping_state = ListState::default();
        shopping_state.select(Some(0));
        let mut bundle_state = ListState::default();
        bundle_state.select(Some(0));

        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            controller,
            links,
            theme,
            selected_index: 0,
            list_state,
            age_cursor: 0,
            menu_cursor: 0,
            detail_scroll: 0,
            classic_only: false,
            shopping_index: 0,
            shopping_state,
            bundle_age: AgeSelector::All,
            expanded_bundles: HashSet::new(),
            bundle_index: 0,
            bundle_state,
            science_scroll: 0,
            show_help: false,
            show_philosophy: false,
            status_message: None,
            error_message: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.controller.mode()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }

    // --- Listing -----------------------------------------------------------

    pub fn filtered(&self) -> Vec<&Activity> {
        self.controller.filtered_activities()
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut query = self.controller.search_query().to_string();
        query.push(c);
        self.controller.set_query(query);
        self.reset_listing_selection();
    }

    pub fn pop_search_char(&mut self) {
        let mut query = self.controller.search_query().to_string();
        query.pop();
        self.controller.set_query(query);
        self.reset_listing_selection();
    }

    pub fn clear_search(&mut self) {
        self.controller.set_query("");
        self.reset_listing_selection();
    }

    fn reset_listing_selection(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn next_result(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1).min(len - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn previous_result(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn highlighted_activity(&self) -> Option<&Activity> {
        self.filtered().get(self.selected_index).copied()
    }

    /// Open the highlighted listing entry in Detail
    pub fn open_highlighted(&mut self) {
        if let Some(id) = self.highlighted_activity().map(|a| a.id.clone()) {
            self.open_activity(&id);
        }
    }

    pub fn open_activity(&mut self, id: &str) {
        if self.controller.select_activity(id) {
            self.detail_scroll = 0;
        }
    }

    // --- Age dropdown ------------------------------------------------------

    pub fn open_age_picker(&mut self) {
        let current = self.controller.selected_age().clone();
        self.age_cursor = AgeSelector::all_filters()
            .iter()
            .position(|a| *a == current)
            .unwrap_or(0);
        self.input_mode = InputMode::AgePicker;
    }

    pub fn age_picker_next(&mut self) {
        self.age_cursor = (self.age_cursor + 1).min(AgeSelector::all_filters().len() - 1);
    }

    pub fn age_picker_previous(&mut self) {
        self.age_cursor = self.age_cursor.saturating_sub(1);
    }

    pub fn confirm_age_picker(&mut self) {
        if let Some(age) = AgeSelector::all_filters().get(self.age_cursor) {
            self.set_age(age.clone());
        }
        self.input_mode = InputMode::Normal;
    }

    fn set_age(&mut self, age: AgeSelector) {
        self.controller.set_age(age);
        self.reset_listing_selection();
        self.reset_shopping_selection();
    }

    /// Step the shared age selector through the canonical filters
    pub fn cycle_age(&mut self, forward: bool) {
        let filters = AgeSelector::all_filters();
        let current = filters
            .iter()
            .position(|a| a == self.controller.selected_age())
            .unwrap_or(0);
        let next = step(current, filters.len(), forward);
        self.set_age(filters[next].clone());
    }

    // --- Navigation drawer -------------------------------------------------

    pub fn open_menu(&mut self) {
        let entries = ViewMode::menu_entries();
        self.menu_cursor = entries
            .iter()
            .position(|m| *m == self.mode())
            .unwrap_or(0);
        self.input_mode = InputMode::Menu;
    }

    pub fn menu_next(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1).min(ViewMode::menu_entries().len() - 1);
    }

    pub fn menu_previous(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    pub fn confirm_menu(&mut self) {
        let entries = ViewMode::menu_entries();
        if let Some(mode) = entries.get(self.menu_cursor) {
            self.switch_to(*mode);
        }
        self.input_mode = InputMode::Normal;
    }

    /// Jump straight to a top-level screen
    pub fn switch_to(&mut self, mode: ViewMode) {
        if self.controller.set_view_mode(mode) {
            self.science_scroll = 0;
            self.reset_shopping_selection();
            self.bundle_index = 0;
            self.bundle_state.select(Some(0));
        }
    }

    pub fn go_back(&mut self) {
        self.controller.go_back();
        self.detail_scroll = 0;
    }

    // --- Detail ------------------------------------------------------------

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn open_next_activity(&mut self) {
        if self.controller.select_next() {
            self.detail_scroll = 0;
        }
    }

    pub fn buy_url(&self) -> Option<String> {
        self.controller
            .selected_activity()
            .map(|a| self.links.buy_url(a))
    }

    pub fn share_payload(&self) -> Option<SharePayload> {
        self.controller
            .selected_activity()
            .map(|a| self.links.share_payload(a))
    }

    // --- Shopping list -----------------------------------------------------

    pub fn shopping_items(&self) -> Vec<String> {
        self.controller.shopping_items(self.classic_only)
    }

    pub fn toggle_classic_only(&mut self) {
        self.classic_only = !self.classic_only;
        self.reset_shopping_selection();
    }

    fn reset_shopping_selection(&mut self) {
        self.shopping_index = 0;
        self.shopping_state.select(Some(0));
    }

    pub fn next_shopping_item(&mut self) {
        let len = self.shopping_items().len();
        if len > 0 {
            self.shopping_index = (self.shopping_index + 1).min(len - 1);
            self.shopping_state.select(Some(self.shopping_index));
        }
    }

    pub fn previous_shopping_item(&mut self) {
        if self.shopping_index > 0 {
            self.shopping_index -= 1;
            self.shopping_state.select(Some(self.shopping_index));
        }
    }

    pub fn selected_shopping_url(&self) -> Option<String> {
        self.shopping_items()
            .get(self.shopping_index)
            .map(|item| self.links.marketplace_search_url(item))
    }

    // --- Bundles -----------------------------------------------------------

    pub fn bundle_age_options(&self) -> Vec<AgeSelector> {
        bundle_age_options(&self.controller.catalog().bundles)
    }

    pub fn visible_bundles(&self) -> Vec<&Bundle> {
        filter_bundles(&self.controller.catalog().bundles, &self.bundle_age)
    }

    /// Flattened rows: every visible bundle, with its activities when expanded
    pub fn bundle_rows(&self) -> Vec<BundleRow> {
        let mut rows = Vec::new();
        for bundle in self.visible_bundles() {
            rows.push(BundleRow::Bundle {
                bundle_id: bundle.id.clone(),
            });
            if self.expanded_bundles.contains(&bundle.id) {
                for activity in self.controller.resolve_bundle_items(bundle) {
                    rows.push(BundleRow::Activity {
                        bundle_id: bundle.id.clone(),
                        activity_id: activity.id.clone(),
                    });
                }
            }
        }
        rows
    }

    pub fn toggle_bundle(&mut self, bundle_id: &str) {
        if !self.expanded_bundles.remove(bundle_id) {
            self.expanded_bundles.insert(bundle_id.to_string());
        }
    }

    /// Enter on a bundle row: expand/collapse a header, open an activity
    pub fn activate_bundle_row(&mut self) {
        match self.bundle_rows().get(self.bundle_index).cloned() {
            Some(BundleRow::Bundle { bundle_id }) => self.toggle_bundle(&bundle_id),
            Some(BundleRow::Activity { activity_id, .. }) => self.open_activity(&activity_id),
            None => {}
        }
    }

    pub fn next_bundle_row(&mut self) {
        let len = self.bundle_rows().len();
        if len > 0 {
            self.bundle_index = (self.bundle_index + 1).min(len - 1);
            self.bundle_state.select(Some(self.bundle_index));
        }
    }

    pub fn previous_bundle_row(&mut self) {
        if self.bundle_index > 0 {
            self.bundle_index -= 1;
            self.bundle_state.select(Some(self.bundle_index));
        }
    }

    pub fn cycle_bundle_age(&mut self, forward: bool) {
        let options = self.bundle_age_options();
        let current = options
            .iter()
            .position(|a| *a == self.bundle_age)
            .unwrap_or(0);
        self.bundle_age = options[step(current, options.len(), forward)].clone();
        self.bundle_index = 0;
        self.bundle_state.select(Some(0));
    }

    pub fn clear_bundle_filter(&mut self) {
        self.bundle_age = AgeSelector::All;
        self.bundle_index = 0;
        self.bundle_state.select(Some(0));
    }

    // --- Science page ------------------------------------------------------

    pub fn scroll_science_down(&mut self) {
        self.science_scroll = self.science_scroll.saturating_add(1);
    }

    pub fn scroll_science_up(&mut self) {
        self.science_scroll = self.science_scroll.saturating_sub(1);
    }

    // --- Popups ------------------------------------------------------------

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_philosophy(&mut self) {
        self.show_philosophy = !self.show_philosophy;
    }
}

/// Wrapping step through `len` options
fn step(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinysteps_core::Catalog;

    fn app() -> App {
        let catalog = Catalog::embedded().unwrap();
        App::new(
            ViewController::new(catalog),
            LinkBuilder::default(),
            Theme::default(),
        )
    }

    #[test]
    fn test_typing_filters_listing() {
        let mut app = app();
        let all = app.filtered().len();
        for c in "tower".chars() {
            app.push_search_char(c);
        }
        assert!(app.filtered().len() < all);
        assert_eq!(
            app.highlighted_activity().map(|a| a.title.as_str()),
            Some("Building the Pink Tower")
        );

        app.clear_search();
        assert_eq!(app.filtered().len(), all);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app();
        let len = app.filtered().len();
        for _ in 0..len + 5 {
            app.next_result();
        }
        assert_eq!(app.selected_index, len - 1);
        for _ in 0..len + 5 {
            app.previous_result();
        }
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_age_picker_sets_age() {
        let mut app = app();
        app.open_age_picker();
        assert_eq!(app.input_mode, InputMode::AgePicker);
        app.age_picker_next();
        app.confirm_age_picker();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.controller.selected_age(), &AgeSelector::parse("0-3 Months"));
        assert!(app
            .filtered()
            .iter()
            .all(|a| a.filter_tag == "0-3 Months"));
    }

    #[test]
    fn test_cycle_age_wraps() {
        let mut app = app();
        app.cycle_age(false);
        assert_eq!(app.controller.selected_age(), &AgeSelector::parse("24+ Months"));
        app.cycle_age(true);
        assert_eq!(app.controller.selected_age(), &AgeSelector::All);
    }

    #[test]
    fn test_menu_switches_views() {
        let mut app = app();
        app.open_menu();
        app.menu_next();
        app.confirm_menu();
        assert_eq!(app.mode(), ViewMode::ShoppingList);
        app.go_back();
        assert_eq!(app.mode(), ViewMode::Listing);
    }

    #[test]
    fn test_open_and_next_activity() {
        let mut app = app();
        app.open_highlighted();
        assert_eq!(app.mode(), ViewMode::Detail);
        let first = app.controller.selected_activity().map(|a| a.id.clone());
        app.scroll_detail_down();
        app.open_next_activity();
        assert_eq!(app.detail_scroll, 0);
        assert_ne!(app.controller.selected_activity().map(|a| a.id.clone()), first);
        assert!(app.buy_url().is_some());
        assert!(app.share_payload().is_some());
    }

    #[test]
    fn test_classic_toggle_narrows_list() {
        let mut app = app();
        app.switch_to(ViewMode::ShoppingList);
        let all = app.shopping_items().len();
        app.toggle_classic_only();
        let classics = app.shopping_items();
        assert!(classics.len() < all);
        assert!(classics.iter().all(|i| app.controller.is_classic(i)));
        assert!(app
            .selected_shopping_url()
            .map(|u| u.starts_with("https://www.amazon.com/s?k="))
            .unwrap_or(false));
    }

    #[test]
    fn test_bundle_expand_and_open() {
        let mut app = app();
        app.switch_to(ViewMode::BundleBrowsing);
        let collapsed = app.bundle_rows().len();
        assert_eq!(collapsed, app.visible_bundles().len());

        app.activate_bundle_row();
        let expanded = app.bundle_rows();
        assert!(expanded.len() > collapsed);
        assert!(matches!(expanded[1], BundleRow::Activity { .. }));

        app.next_bundle_row();
        app.activate_bundle_row();
        assert_eq!(app.mode(), ViewMode::Detail);
    }

    #[test]
    fn test_bundle_age_filter() {
        let mut app = app();
        app.switch_to(ViewMode::BundleBrowsing);
        let total = app.visible_bundles().len();
        app.cycle_bundle_age(true);
        let age = app.bundle_age.clone();
        assert_ne!(age, AgeSelector::All);
        assert!(app.visible_bundles().iter().all(|b| age.matches(&b.age_range)));
        assert!(app.visible_bundles().len() < total);

        app.clear_bundle_filter();
        assert_eq!(app.visible_bundles().len(), total);
    }

    #[test]
    fn test_step_wraps_both_ways() {
        assert_eq!(step(0, 3, false), 2);
        assert_eq!(step(2, 3, true), 0);
        assert_eq!(step(0, 0, true), 0);
    }
}
