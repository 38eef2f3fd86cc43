//! ListingFilter - Filter Selection Controller
//!
//! Maintains tentative (pending) vs. applied (committed) filter criteria for
//! the events feed. The pending criteria are edited inside the filter panel;
//! only the committed criteria drive the visible list. The two filter axes
//! are mutually exclusive: choosing a value on one axis clears the other.

use crate::domain::listing::Listing;

/// One of the two filter dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterAxis {
    #[default]
    Category,
    Date,
}

impl FilterAxis {
    pub fn label(&self) -> &'static str {
        match self {
            FilterAxis::Category => "Category",
            FilterAxis::Date => "Date",
        }
    }

    pub fn all() -> &'static [FilterAxis] {
        &[FilterAxis::Category, FilterAxis::Date]
    }
}

/// A pair of optional selectors, at most one set at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub date: Option<String>,
}

impl FilterCriteria {
    /// Whether no selector is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.date.is_none()
    }

    /// Whether a listing passes the criteria: each set selector must equal
    /// the listing's corresponding tag
    pub fn matches(&self, listing: &Listing) -> bool {
        self.category
            .as_deref()
            .is_none_or(|c| listing.category == c)
            && self.date.as_deref().is_none_or(|d| listing.date == d)
    }

    /// The currently selected value on an axis
    pub fn get(&self, axis: FilterAxis) -> Option<&str> {
        match axis {
            FilterAxis::Category => self.category.as_deref(),
            FilterAxis::Date => self.date.as_deref(),
        }
    }
}

/// Filter selection controller state
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    /// Criteria applied to the visible list
    pub committed: FilterCriteria,
    /// Criteria being edited in the panel; stale while the panel is closed
    pub pending: FilterCriteria,
    /// Which selector group the panel currently shows
    pub active_axis: FilterAxis,
    /// Whether the filter panel is open
    pub is_open: bool,
}

impl ListingFilter {
    /// Open the filter panel, seeding pending from committed. The panel
    /// opens on the axis that already has a committed selection, defaulting
    /// to category.
    pub fn open_panel(&mut self) {
        self.pending = self.committed.clone();
        self.active_axis = if self.committed.category.is_some() {
            FilterAxis::Category
        } else if self.committed.date.is_some() {
            FilterAxis::Date
        } else {
            FilterAxis::Category
        };
        self.is_open = true;
    }

    /// Switch the displayed selector group; idempotent
    pub fn select_axis(&mut self, axis: FilterAxis) {
        self.active_axis = axis;
    }

    /// Choose a pending value on an axis, clearing the other axis.
    /// Re-choosing the current value keeps it selected.
    pub fn choose_option(&mut self, axis: FilterAxis, value: impl Into<String>) {
        match axis {
            FilterAxis::Category => {
                self.pending = FilterCriteria {
                    category: Some(value.into()),
                    date: None,
                };
            }
            FilterAxis::Date => {
                self.pending = FilterCriteria {
                    category: None,
                    date: Some(value.into()),
                };
            }
        }
    }

    /// Commit the pending criteria and close the panel
    pub fn apply(&mut self) {
        self.committed = self.pending.clone();
        self.is_open = false;
    }

    /// Close the panel without committing; pending is left stale and is
    /// overwritten by the next open_panel
    pub fn cancel(&mut self) {
        self.is_open = false;
    }

    /// Reset both criteria to empty and close the panel
    pub fn clear(&mut self) {
        self.pending = FilterCriteria::default();
        self.committed = FilterCriteria::default();
        self.is_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(category: &str, date: &str) -> Listing {
        Listing::new("id", "title", "org", "area", category, date)
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.matches(&listing("Games", "Oct 5")));
        assert!(criteria.matches(&listing("Study", "Oct 4")));
    }

    #[test]
    fn test_category_criteria_matches_by_tag() {
        let criteria = FilterCriteria {
            category: Some("Games".to_string()),
            date: None,
        };
        assert!(criteria.matches(&listing("Games", "Oct 5")));
        assert!(!criteria.matches(&listing("Study", "Oct 5")));
    }

    #[test]
    fn test_open_panel_seeds_pending_and_axis() {
        let mut filter = ListingFilter::default();
        filter.committed.date = Some("Oct 5".to_string());
        filter.pending.category = Some("stale".to_string());

        filter.open_panel();

        assert!(filter.is_open);
        assert_eq!(filter.pending, filter.committed);
        assert_eq!(filter.active_axis, FilterAxis::Date);
    }

    #[test]
    fn test_open_panel_defaults_to_category_axis() {
        let mut filter = ListingFilter::default();
        filter.open_panel();
        assert_eq!(filter.active_axis, FilterAxis::Category);

        filter.committed.category = Some("Games".to_string());
        filter.open_panel();
        assert_eq!(filter.active_axis, FilterAxis::Category);
    }

    #[test]
    fn test_choose_option_is_single_axis() {
        let mut filter = ListingFilter::default();
        filter.open_panel();

        filter.choose_option(FilterAxis::Category, "Games");
        assert_eq!(filter.pending.category.as_deref(), Some("Games"));
        assert_eq!(filter.pending.date, None);

        // Most-recent-axis wins: a date choice clears the category
        filter.choose_option(FilterAxis::Date, "Oct 5");
        assert_eq!(filter.pending.category, None);
        assert_eq!(filter.pending.date.as_deref(), Some("Oct 5"));
    }

    #[test]
    fn test_rechoosing_same_value_keeps_it() {
        let mut filter = ListingFilter::default();
        filter.open_panel();
        filter.choose_option(FilterAxis::Category, "Games");
        filter.choose_option(FilterAxis::Category, "Games");
        assert_eq!(filter.pending.category.as_deref(), Some("Games"));
    }

    #[test]
    fn test_apply_commits_pending() {
        let mut filter = ListingFilter::default();
        filter.open_panel();
        filter.choose_option(FilterAxis::Category, "Music");
        filter.apply();

        assert!(!filter.is_open);
        assert_eq!(filter.committed.category.as_deref(), Some("Music"));
    }

    #[test]
    fn test_cancel_never_changes_committed() {
        let mut filter = ListingFilter::default();
        filter.committed.category = Some("Games".to_string());

        filter.open_panel();
        filter.choose_option(FilterAxis::Date, "Oct 5");
        filter.cancel();

        assert!(!filter.is_open);
        assert_eq!(filter.committed.category.as_deref(), Some("Games"));
        assert_eq!(filter.committed.date, None);

        // The stale pending is discarded on the next open
        filter.open_panel();
        assert_eq!(filter.pending, filter.committed);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut filter = ListingFilter::default();
        filter.open_panel();
        filter.choose_option(FilterAxis::Category, "Games");
        filter.apply();

        filter.clear();
        assert!(filter.committed.is_empty());
        assert!(filter.pending.is_empty());
        assert!(!filter.is_open);

        filter.clear();
        assert!(filter.committed.is_empty());
        assert!(filter.pending.is_empty());
    }
}
