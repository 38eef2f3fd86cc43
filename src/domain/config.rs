//! AppConfig - Local Application Preferences
//!
//! UI preferences persisted as JSON in the local data directory. Domain data
//! (listings, subscriptions, profile) is never persisted in the prototype.

use serde::{Deserialize, Serialize};

use crate::domain::venue::MapRegion;

/// Persisted application preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Last map region the user viewed
    pub map_region: MapRegion,
    /// Whether the debug log panel is shown
    pub show_log_panel: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_region: MapRegion::default(),
            show_log_panel: false,
        }
    }
}
