//! Navigation - Active Page Management
//!
//! Defines the pages available behind the bottom tab strip.

use serde::{Deserialize, Serialize};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Events feed with the filter panel
    #[default]
    Events,
    /// Promoter's own events grid
    MyEvents,
    /// Subscribed promoters
    Subscriptions,
    /// Venue map
    Map,
    /// Promoter profile and analytics
    Profile,
}

impl ActivePage {
    /// Get the icon glyph for the tab
    pub fn icon(&self) -> &'static str {
        match self {
            ActivePage::Events => "▤",
            ActivePage::MyEvents => "＋",
            ActivePage::Subscriptions => "★",
            ActivePage::Map => "◉",
            ActivePage::Profile => "●",
        }
    }

    /// Get the tab label
    pub fn title(&self) -> &'static str {
        match self {
            ActivePage::Events => "Events",
            ActivePage::MyEvents => "My Events",
            ActivePage::Subscriptions => "Subs",
            ActivePage::Map => "Map",
            ActivePage::Profile => "Profile",
        }
    }

    /// Get all pages for the tab strip
    pub fn all() -> &'static [ActivePage] {
        &[
            ActivePage::Events,
            ActivePage::MyEvents,
            ActivePage::Subscriptions,
            ActivePage::Map,
            ActivePage::Profile,
        ]
    }
}
