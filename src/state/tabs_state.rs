//! TabsState - Tab Navigation State

use crate::app::navigation::ActivePage;

/// State for the fixed bottom tab strip
#[derive(Debug, Default)]
pub struct TabsState {
    /// Currently active page
    pub active_page: ActivePage,
}

impl TabsState {
    /// Set the active page (from a tab press)
    pub fn set_active_page(&mut self, page: ActivePage) {
        self.active_page = page;
    }
}
