//! Events Controller
//!
//! Mediates the events feed: data refresh and every filter panel operation.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;
use crate::state::filter_state::FilterAxis;

/// Events page controller
pub struct EventsController {
    entities: AppEntities,
}

impl EventsController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Reload the feed from the catalog
    pub fn refresh(&self, cx: &mut App) {
        self.entities.listings.update(cx, |state, cx| {
            state.set_loading(true);
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.refresh_listings();
        }
    }

    /// Open the filter panel
    pub fn open_filter(&self, cx: &mut App) {
        self.entities.listings.update(cx, |state, cx| {
            state.filter.open_panel();
            cx.notify();
        });
    }

    /// Switch the displayed selector group
    pub fn select_axis(&self, axis: FilterAxis, cx: &mut App) {
        self.entities.listings.update(cx, |state, cx| {
            state.filter.select_axis(axis);
            cx.notify();
        });
    }

    /// Choose a pending filter value
    pub fn choose_option(&self, axis: FilterAxis, value: &str, cx: &mut App) {
        self.entities.listings.update(cx, |state, cx| {
            state.choose_option(axis, value);
            cx.notify();
        });
    }

    /// Commit the pending criteria
    pub fn apply_filter(&self, cx: &mut App) {
        self.entities.listings.update(cx, |state, cx| {
            state.filter.apply();
            cx.notify();
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info("Filter applied"));
        }
    }

    /// Dismiss the panel without committing
    pub fn cancel_filter(&self, cx: &mut App) {
        self.entities.listings.update(cx, |state, cx| {
            state.filter.cancel();
            cx.notify();
        });
    }

    /// Reset the filter entirely
    pub fn clear_filter(&self, cx: &mut App) {
        self.entities.listings.update(cx, |state, cx| {
            state.filter.clear();
            cx.notify();
        });
    }
}
