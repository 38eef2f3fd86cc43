//! ListingsState - Event Feed State
//!
//! Holds the listing set for the events feed together with its filter
//! controller. The visible subset is always derived from the committed
//! criteria; option lists are derived from the listing set alone.

use crate::domain::listing::Listing;
use crate::state::filter_state::{FilterAxis, ListingFilter};

/// State for the events feed
#[derive(Debug, Clone, Default)]
pub struct ListingsState {
    /// All listings, as loaded from the catalog
    pub listings: Vec<Listing>,
    /// Filter selection controller
    pub filter: ListingFilter,
    /// Whether data is loading
    pub loading: bool,
}

impl ListingsState {
    /// Replace the listing set
    pub fn update_listings(&mut self, listings: Vec<Listing>) {
        self.listings = listings;
        self.loading = false;
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Listings passing the committed criteria, in original order
    pub fn visible_listings(&self) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| self.filter.committed.matches(l))
            .collect()
    }

    /// Distinct category tags, first-seen order
    pub fn category_options(&self) -> Vec<String> {
        dedup_first_seen(self.listings.iter().map(|l| l.category.as_str()))
    }

    /// Distinct date tags, first-seen order
    pub fn date_options(&self) -> Vec<String> {
        dedup_first_seen(self.listings.iter().map(|l| l.date.as_str()))
    }

    /// Option list for an axis
    pub fn options_for(&self, axis: FilterAxis) -> Vec<String> {
        match axis {
            FilterAxis::Category => self.category_options(),
            FilterAxis::Date => self.date_options(),
        }
    }

    /// Choose a pending filter value. Values outside the offered option list
    /// are ignored so the controller stays total.
    pub fn choose_option(&mut self, axis: FilterAxis, value: &str) {
        if self.options_for(axis).iter().any(|v| v == value) {
            self.filter.choose_option(axis, value);
        }
    }
}

/// Deduplicate tags preserving first-seen order
fn dedup_first_seen<'a>(tags: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for tag in tags {
        if !seen.iter().any(|s| s == tag) {
            seen.push(tag.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> ListingsState {
        let mut state = ListingsState::default();
        state.update_listings(vec![
            Listing::new("1", "Fifa Tournament", "Gaming Club", "TRU Campus", "Games", "Oct 5"),
            Listing::new("2", "Study Group", "CS Club", "TRU Campus", "Study", "Oct 4"),
            Listing::new("3", "Poker Night", "Gaming Club", "Sahali", "Games", "Oct 8"),
        ]);
        state
    }

    #[test]
    fn test_no_filter_shows_all() {
        let state = sample_state();
        assert_eq!(state.visible_listings().len(), 3);
    }

    #[test]
    fn test_filter_then_clear_scenario() {
        let mut state = sample_state();

        state.filter.open_panel();
        state.choose_option(FilterAxis::Category, "Games");
        state.filter.apply();

        let visible = state.visible_listings();
        assert_eq!(visible.len(), 2);
        // Original order preserved
        assert_eq!(visible[0].id, "1");
        assert_eq!(visible[1].id, "3");

        state.filter.clear();
        assert_eq!(state.visible_listings().len(), 3);
    }

    #[test]
    fn test_date_filter() {
        let mut state = sample_state();
        state.filter.open_panel();
        state.choose_option(FilterAxis::Date, "Oct 4");
        state.filter.apply();

        let visible = state.visible_listings();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Study Group");
    }

    #[test]
    fn test_options_dedup_first_seen_order() {
        let state = sample_state();
        assert_eq!(state.category_options(), vec!["Games", "Study"]);
        assert_eq!(state.date_options(), vec!["Oct 5", "Oct 4", "Oct 8"]);
    }

    #[test]
    fn test_options_ignore_committed_filter() {
        let mut state = sample_state();
        state.filter.open_panel();
        state.choose_option(FilterAxis::Category, "Study");
        state.filter.apply();

        // The full distinct universe is always offered
        assert_eq!(state.category_options(), vec!["Games", "Study"]);
        assert_eq!(state.date_options(), vec!["Oct 5", "Oct 4", "Oct 8"]);
    }

    #[test]
    fn test_out_of_domain_choice_is_noop() {
        let mut state = sample_state();
        state.filter.open_panel();
        state.choose_option(FilterAxis::Category, "Karaoke");
        assert!(state.filter.pending.is_empty());

        state.filter.apply();
        assert_eq!(state.visible_listings().len(), 3);
    }

    #[test]
    fn test_updating_listings_refreshes_options() {
        let mut state = sample_state();
        state.update_listings(vec![Listing::new(
            "9", "Open Mic", "Campus Clubs", "Student Union", "Music", "Oct 12",
        )]);
        assert_eq!(state.category_options(), vec!["Music"]);
        assert!(!state.loading);
    }
}
