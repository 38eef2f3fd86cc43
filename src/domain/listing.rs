//! Listing - Event Listing Data

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A published event listing
///
/// Category and date are free-text tags drawn from a small open set;
/// dates are display strings and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique ID
    pub id: String,
    /// Event title
    pub title: String,
    /// Organizer / promoter name
    pub organizer: String,
    /// Area or venue label
    pub area: String,
    /// Category tag (e.g. "Games", "Music", "Study")
    pub category: String,
    /// Date/time tag (e.g. "Friday, 9 PM")
    pub date: String,
}

impl Listing {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        organizer: impl Into<String>,
        area: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            organizer: organizer.into(),
            area: area.into(),
            category: category.into(),
            date: date.into(),
        }
    }
}

/// Form state for creating or editing a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDraft {
    pub title: String,
    pub area: String,
    pub category: String,
    pub date: String,
}

impl ListingDraft {
    /// A draft is submittable once every field has content
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the draft, naming the first missing field
    pub fn validate(&self) -> Result<()> {
        let missing = [
            ("title", &self.title),
            ("area", &self.area),
            ("category", &self.category),
            ("date", &self.date),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

        match missing {
            Some((field, _)) => Err(Error::Invalid {
                message: format!("missing {field}"),
            }),
            None => Ok(()),
        }
    }

    /// Pre-fill a draft from an existing listing (edit flow)
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            area: listing.area.clone(),
            category: listing.category.clone(),
            date: listing.date.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_requires_all_fields() {
        let mut draft = ListingDraft::default();
        assert!(!draft.is_valid());

        draft.title = "Poker Night".to_string();
        draft.area = "Sahali".to_string();
        draft.category = "Games".to_string();
        assert!(!draft.is_valid());

        draft.date = "Oct 2, 8 PM".to_string();
        assert!(draft.is_valid());
    }

    #[test]
    fn test_draft_from_listing_is_valid() {
        let listing = Listing::new("1", "Poker Night", "Nightshift", "Sahali", "Games", "Oct 2");
        let draft = ListingDraft::from_listing(&listing);
        assert!(draft.is_valid());
        assert_eq!(draft.title, "Poker Night");
    }

    #[test]
    fn test_validate_names_first_missing_field() {
        let draft = ListingDraft {
            title: "Poker Night".to_string(),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid: missing area");
    }

    #[test]
    fn test_draft_rejects_whitespace_only() {
        let draft = ListingDraft {
            title: "   ".to_string(),
            area: "Sahali".to_string(),
            category: "Games".to_string(),
            date: "Oct 2".to_string(),
        };
        assert!(!draft.is_valid());
    }
}
