//! Map Controller
//!
//! Recenter actions and persistence of the viewed region.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::config::AppConfig;
use crate::domain::venue::MapRegion;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;
use crate::utils::config_store;

/// Map page controller
pub struct MapController {
    entities: AppEntities,
}

impl MapController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Center the region on a venue
    pub fn center_on(&self, latitude: f64, longitude: f64, cx: &mut App) {
        self.entities.map.update(cx, |state, cx| {
            state.set_center(latitude, longitude);
            cx.notify();
        });

        self.persist_region(cx);
    }

    /// Reset to the default region
    pub fn reset_region(&self, cx: &mut App) {
        self.entities.map.update(cx, |state, cx| {
            state.region = MapRegion::default();
            cx.notify();
        });

        self.persist_region(cx);
    }

    /// Save the viewed region into local preferences
    fn persist_region(&self, cx: &mut App) {
        let region = self.entities.map.read(cx).region;
        let show_log_panel = self.entities.logs.read(cx).visible;

        let config = AppConfig {
            map_region: region,
            show_log_panel,
        };

        if let Err(e) = config_store::save_config("config.json", &config) {
            if let Some(hub) = cx.try_global::<ServiceHub>() {
                hub.log(AppEvent::error(format!("Failed to save config: {e}")));
            }
        }
    }
}
