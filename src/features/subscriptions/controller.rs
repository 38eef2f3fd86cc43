//! Subscriptions Controller

use gpui::App;

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;

/// Subscriptions page controller
pub struct SubscriptionsController {
    entities: AppEntities,
}

impl SubscriptionsController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Reload subscriptions from the catalog
    pub fn refresh(&self, cx: &mut App) {
        self.entities.subscriptions.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.load_catalog();
        }
    }

    /// Redeem placeholder: promotions have no backend in the prototype
    pub fn redeem_promotion(&self, title: &str, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info(format!("Redeeming promotion: {title}")));
        }
    }
}
