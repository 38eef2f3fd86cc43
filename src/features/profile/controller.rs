//! Profile Controller
//!
//! Placeholder promoter actions. Nothing here has a backend; every handler
//! logs through the hub exactly like the prototype logged to console.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;

/// Profile page controller
pub struct ProfileController {
    entities: AppEntities,
}

impl ProfileController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Edit-profile placeholder
    pub fn edit_profile(&self, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info("Navigating to edit business profile..."));
        }
    }

    /// Analytics placeholder
    pub fn view_analytics(&self, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info("Navigating to analytics dashboard..."));
        }
    }

    /// Upload a customer agreement
    pub fn upload_agreement(&self, title: &str, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.upload_agreement(title);
        }
    }

    /// Log-out placeholder
    pub fn log_out(&self, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::warn("Log out is not implemented in the prototype"));
        }
    }

    /// Toggle the debug log panel
    pub fn toggle_log_panel(&self, cx: &mut App) {
        self.entities.logs.update(cx, |logs, cx| {
            logs.toggle_visible();
            cx.notify();
        });
    }
}
