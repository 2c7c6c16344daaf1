use super::visibility::{HideTicket, SuggestionVisibility};

/// One of the two autocomplete fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Country,
    City,
}

impl FilterField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Country => "country",
            FilterField::City => "city",
        }
    }
}

/// Filter state of the Stores view.
///
/// Created empty on mount, mutated only through the methods below and
/// dropped on unmount. Selected countries and cities keep insertion order
/// and never contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreFilterState {
    // committed filters
    selected_countries: Vec<String>,
    selected_cities: Vec<String>,
    opening_hour: String,
    closing_hour: String,
    is_all_day_open: bool,

    // transient autocomplete input
    country_input: String,
    city_input: String,
    country_suggestions: SuggestionVisibility,
    city_suggestions: SuggestionVisibility,
}

impl StoreFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn selected_countries(&self) -> &[String] {
        &self.selected_countries
    }

    pub fn selected_cities(&self) -> &[String] {
        &self.selected_cities
    }

    pub fn selected(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Country => &self.selected_countries,
            FilterField::City => &self.selected_cities,
        }
    }

    /// `None` when no opening-hour constraint is set.
    pub fn opening_hour(&self) -> Option<&str> {
        non_empty(&self.opening_hour)
    }

    pub fn closing_hour(&self) -> Option<&str> {
        non_empty(&self.closing_hour)
    }

    /// Raw dropdown value, empty when unset.
    pub fn opening_hour_value(&self) -> &str {
        &self.opening_hour
    }

    pub fn closing_hour_value(&self) -> &str {
        &self.closing_hour
    }

    pub fn is_all_day_open(&self) -> bool {
        self.is_all_day_open
    }

    /// The hour dropdowns are locked while "all day" is on.
    pub fn hour_inputs_disabled(&self) -> bool {
        self.is_all_day_open
    }

    pub fn input_text(&self, field: FilterField) -> &str {
        match field {
            FilterField::Country => &self.country_input,
            FilterField::City => &self.city_input,
        }
    }

    pub fn country_input_text(&self) -> &str {
        &self.country_input
    }

    pub fn city_input_text(&self) -> &str {
        &self.city_input
    }

    pub fn suggestions(&self, field: FilterField) -> &SuggestionVisibility {
        match field {
            FilterField::Country => &self.country_suggestions,
            FilterField::City => &self.city_suggestions,
        }
    }

    pub fn suggestions_visible(&self, field: FilterField) -> bool {
        self.suggestions(field).is_visible()
    }

    /// Number of committed constraints, for the filter panel badge.
    pub fn active_filter_count(&self) -> usize {
        let hours = if self.is_all_day_open {
            1
        } else {
            usize::from(self.opening_hour().is_some()) + usize::from(self.closing_hour().is_some())
        };
        self.selected_countries.len() + self.selected_cities.len() + hours
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    // ------------------------------------------------------------------
    // Hours
    // ------------------------------------------------------------------

    /// Stored verbatim. The dropdown limits values to the canonical hours.
    pub fn set_opening_hour(&mut self, value: impl Into<String>) {
        self.opening_hour = value.into();
        log::debug!("store filter: opening hour = '{}'", self.opening_hour);
    }

    pub fn set_closing_hour(&mut self, value: impl Into<String>) {
        self.closing_hour = value.into();
        log::debug!("store filter: closing hour = '{}'", self.closing_hour);
    }

    /// Hour values survive toggling; they are only inert while the flag is on.
    pub fn set_all_day_open(&mut self, flag: bool) {
        self.is_all_day_open = flag;
        log::debug!("store filter: all day open = {}", flag);
    }

    // ------------------------------------------------------------------
    // Autocomplete fields
    // ------------------------------------------------------------------

    /// Also reopens the field's dropdown when the field has focus.
    pub fn set_input_text(&mut self, field: FilterField, text: impl Into<String>) {
        *self.input_mut(field) = text.into();
        self.visibility_mut(field).input_changed();
    }

    pub fn set_country_input_text(&mut self, text: impl Into<String>) {
        self.set_input_text(FilterField::Country, text);
    }

    pub fn set_city_input_text(&mut self, text: impl Into<String>) {
        self.set_input_text(FilterField::City, text);
    }

    /// Appends `value` unless it is blank or already selected (exact,
    /// case-sensitive). On success the field's input is cleared and its
    /// dropdown hidden. Returns whether the selection changed.
    pub fn add_filter(&mut self, field: FilterField, value: &str) -> bool {
        if value.trim().is_empty() {
            return false;
        }
        let selected = self.selected_mut(field);
        if selected.iter().any(|v| v == value) {
            return false;
        }
        selected.push(value.to_string());
        self.input_mut(field).clear();
        self.visibility_mut(field).hide_now();
        log::debug!("store filter: + {} '{}'", field.as_str(), value);
        true
    }

    pub fn add_country_filter(&mut self, country: &str) -> bool {
        self.add_filter(FilterField::Country, country)
    }

    pub fn add_city_filter(&mut self, city: &str) -> bool {
        self.add_filter(FilterField::City, city)
    }

    /// Removing a country leaves selected cities untouched, even those no
    /// longer offered under the narrower country set.
    pub fn remove_filter(&mut self, field: FilterField, value: &str) -> bool {
        let selected = self.selected_mut(field);
        let before = selected.len();
        selected.retain(|v| v != value);
        let removed = selected.len() != before;
        if removed {
            log::debug!("store filter: - {} '{}'", field.as_str(), value);
        }
        removed
    }

    pub fn remove_country_filter(&mut self, country: &str) -> bool {
        self.remove_filter(FilterField::Country, country)
    }

    pub fn remove_city_filter(&mut self, city: &str) -> bool {
        self.remove_filter(FilterField::City, city)
    }

    /// Enter key in an autocomplete field: add the trimmed input text.
    pub fn commit_input(&mut self, field: FilterField) -> bool {
        let text = self.input_text(field).trim().to_string();
        self.add_filter(field, &text)
    }

    /// Pointer-down on a dropdown entry. The list closes even when the
    /// value was already selected.
    pub fn select_suggestion(&mut self, field: FilterField, value: &str) -> bool {
        let added = self.add_filter(field, value);
        self.visibility_mut(field).hide_now();
        added
    }

    pub fn focus_gained(&mut self, field: FilterField) {
        self.visibility_mut(field).focus_gained();
    }

    /// Schedule the returned ticket with [`Self::hide_timer_elapsed`].
    pub fn focus_lost(&mut self, field: FilterField) -> HideTicket {
        self.visibility_mut(field).focus_lost()
    }

    pub fn hide_timer_elapsed(&mut self, field: FilterField, ticket: HideTicket) -> bool {
        self.visibility_mut(field).timer_elapsed(ticket)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
        log::debug!("store filter: reset");
    }

    fn selected_mut(&mut self, field: FilterField) -> &mut Vec<String> {
        match field {
            FilterField::Country => &mut self.selected_countries,
            FilterField::City => &mut self.selected_cities,
        }
    }

    fn input_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Country => &mut self.country_input,
            FilterField::City => &mut self.city_input,
        }
    }

    fn visibility_mut(&mut self, field: FilterField) -> &mut SuggestionVisibility {
        match field {
            FilterField::Country => &mut self.country_suggestions,
            FilterField::City => &mut self.city_suggestions,
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_in_order() {
        let mut st = StoreFilterState::new();
        assert!(st.add_country_filter("USA"));
        assert!(st.add_country_filter("Turkey"));
        assert_eq!(st.selected_countries(), &["USA", "Turkey"]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut st = StoreFilterState::new();
        st.add_country_filter("USA");
        let before = st.clone();
        assert!(!st.add_country_filter("USA"));
        assert_eq!(st, before);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut st = StoreFilterState::new();
        st.set_country_input_text("  ");
        assert!(!st.add_country_filter(""));
        assert!(!st.add_country_filter("  "));
        assert!(st.selected_countries().is_empty());
        // input text is left as typed
        assert_eq!(st.country_input_text(), "  ");
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut st = StoreFilterState::new();
        st.add_city_filter("Berlin");
        assert!(st.add_city_filter("berlin"));
        assert_eq!(st.selected_cities(), &["Berlin", "berlin"]);
    }

    #[test]
    fn test_add_clears_input_and_hides_suggestions() {
        let mut st = StoreFilterState::new();
        st.focus_gained(FilterField::Country);
        st.set_country_input_text("tur");
        assert!(st.suggestions_visible(FilterField::Country));

        st.add_country_filter("Turkey");
        assert_eq!(st.country_input_text(), "");
        assert!(!st.suggestions_visible(FilterField::Country));
    }

    #[test]
    fn test_failed_add_keeps_input() {
        let mut st = StoreFilterState::new();
        st.add_country_filter("USA");
        st.focus_gained(FilterField::Country);
        st.set_country_input_text("USA");
        assert!(!st.commit_input(FilterField::Country));
        assert_eq!(st.country_input_text(), "USA");
        assert!(st.suggestions_visible(FilterField::Country));
    }

    #[test]
    fn test_commit_trims_input() {
        let mut st = StoreFilterState::new();
        st.set_city_input_text("  Warsaw ");
        assert!(st.commit_input(FilterField::City));
        assert_eq!(st.selected_cities(), &["Warsaw"]);
        assert_eq!(st.city_input_text(), "");

        st.set_city_input_text("   ");
        assert!(!st.commit_input(FilterField::City));
        assert_eq!(st.selected_cities().len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut st = StoreFilterState::new();
        st.add_country_filter("USA");
        st.add_country_filter("Poland");
        assert!(st.remove_country_filter("USA"));
        assert_eq!(st.selected_countries(), &["Poland"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut st = StoreFilterState::new();
        st.add_country_filter("USA");
        let before = st.clone();
        assert!(!st.remove_country_filter("Germany"));
        assert!(!st.remove_city_filter("Berlin"));
        assert_eq!(st, before);
    }

    #[test]
    fn test_removing_country_keeps_stale_cities() {
        // known quirk: cities chosen under a country outlive that country
        let mut st = StoreFilterState::new();
        st.add_country_filter("Turkey");
        st.add_city_filter("Ankara");
        st.remove_country_filter("Turkey");
        assert!(st.selected_countries().is_empty());
        assert_eq!(st.selected_cities(), &["Ankara"]);
    }

    #[test]
    fn test_all_day_keeps_hours() {
        let mut st = StoreFilterState::new();
        st.set_opening_hour("09:00");
        st.set_closing_hour("21:00");
        st.set_all_day_open(true);
        assert!(st.hour_inputs_disabled());
        assert_eq!(st.opening_hour(), Some("09:00"));

        st.set_all_day_open(false);
        assert_eq!(st.opening_hour(), Some("09:00"));
        assert_eq!(st.closing_hour(), Some("21:00"));
    }

    #[test]
    fn test_hours_are_passthrough() {
        let mut st = StoreFilterState::new();
        st.set_opening_hour("not-an-hour");
        assert_eq!(st.opening_hour(), Some("not-an-hour"));
        st.set_opening_hour("");
        assert_eq!(st.opening_hour(), None);
        assert_eq!(st.opening_hour_value(), "");
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut st = StoreFilterState::new();
        st.add_country_filter("USA");
        st.add_city_filter("New York");
        st.set_opening_hour("09:00");
        st.set_closing_hour("21:00");
        st.set_all_day_open(true);
        st.set_country_input_text("ger");
        st.set_city_input_text("ber");
        st.focus_gained(FilterField::City);

        st.reset();
        assert!(st.is_empty());
        assert_eq!(st, StoreFilterState::default());
    }

    #[test]
    fn test_select_suggestion_always_closes_list() {
        let mut st = StoreFilterState::new();
        st.add_country_filter("USA");
        st.focus_gained(FilterField::Country);
        assert!(!st.select_suggestion(FilterField::Country, "USA"));
        assert!(!st.suggestions_visible(FilterField::Country));
    }

    #[test]
    fn test_typing_after_pick_reopens_list() {
        let mut st = StoreFilterState::new();
        st.focus_gained(FilterField::Country);
        st.select_suggestion(FilterField::Country, "Turkey");
        assert!(!st.suggestions_visible(FilterField::Country));

        // the field kept focus, so the next keystroke shows the list again
        st.set_country_input_text("g");
        assert!(st.suggestions_visible(FilterField::Country));
        assert_eq!(st.selected_countries(), &["Turkey"]);
    }

    #[test]
    fn test_blur_then_suggestion_click() {
        let mut st = StoreFilterState::new();
        st.focus_gained(FilterField::City);
        let ticket = st.focus_lost(FilterField::City);
        // pointer-down lands before the hide delay
        assert!(st.suggestions_visible(FilterField::City));
        st.select_suggestion(FilterField::City, "Berlin");
        assert!(!st.hide_timer_elapsed(FilterField::City, ticket));
        assert_eq!(st.selected_cities(), &["Berlin"]);
    }

    #[test]
    fn test_fields_are_independent() {
        let mut st = StoreFilterState::new();
        st.focus_gained(FilterField::Country);
        assert!(!st.suggestions_visible(FilterField::City));
        st.set_city_input_text("war");
        assert_eq!(st.country_input_text(), "");
    }

    #[test]
    fn test_active_filter_count() {
        let mut st = StoreFilterState::new();
        assert_eq!(st.active_filter_count(), 0);
        st.add_country_filter("USA");
        st.add_city_filter("New York");
        st.set_opening_hour("09:00");
        assert_eq!(st.active_filter_count(), 3);
        st.set_closing_hour("21:00");
        assert_eq!(st.active_filter_count(), 4);
        st.set_all_day_open(true);
        assert_eq!(st.active_filter_count(), 3);
        // typing alone does not count
        st.set_country_input_text("pol");
        assert_eq!(st.active_filter_count(), 3);
    }
}
