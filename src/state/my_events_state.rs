//! MyEventsState - Promoter's Own Listings

use crate::domain::listing::{Listing, ListingDraft};

/// State for the My Events grid and the add-event form
#[derive(Debug, Clone, Default)]
pub struct MyEventsState {
    /// Listings created by this promoter
    pub events: Vec<Listing>,
    /// Draft being edited in the add-event modal
    pub draft: ListingDraft,
    /// Whether the add-event modal is open
    pub adding: bool,
    /// Whether data is loading
    pub loading: bool,
}

impl MyEventsState {
    /// Replace the promoter's listing set
    pub fn update_events(&mut self, events: Vec<Listing>) {
        self.events = events;
        self.loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Open the add-event modal with a fresh draft
    pub fn open_add(&mut self) {
        self.draft = ListingDraft::default();
        self.adding = true;
    }

    /// Close the add-event modal, discarding the draft
    pub fn cancel_add(&mut self) {
        self.adding = false;
    }

    /// Take the draft for submission if it is valid, closing the modal
    pub fn take_valid_draft(&mut self) -> Option<ListingDraft> {
        if !self.draft.is_valid() {
            return None;
        }
        self.adding = false;
        Some(std::mem::take(&mut self.draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_add_resets_draft() {
        let mut state = MyEventsState::default();
        state.draft.title = "Leftover".to_string();

        state.open_add();
        assert!(state.adding);
        assert_eq!(state.draft, ListingDraft::default());
    }

    #[test]
    fn test_invalid_draft_is_not_taken() {
        let mut state = MyEventsState::default();
        state.open_add();
        state.draft.title = "Poker Night".to_string();

        assert!(state.take_valid_draft().is_none());
        // Modal stays open so the user can finish the form
        assert!(state.adding);
    }

    #[test]
    fn test_valid_draft_is_taken_once() {
        let mut state = MyEventsState::default();
        state.open_add();
        state.draft = ListingDraft {
            title: "Poker Night".to_string(),
            area: "Sahali".to_string(),
            category: "Games".to_string(),
            date: "Oct 2, 8 PM".to_string(),
        };

        let draft = state.take_valid_draft();
        assert!(draft.is_some());
        assert!(!state.adding);
        assert!(state.take_valid_draft().is_none());
    }
}
