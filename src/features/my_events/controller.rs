//! My Events Controller
//!
//! Handles the add-event form and the grid's placeholder actions. Submit and
//! delete round-trip through the service hub; edit and share only log, as in
//! the prototype.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::listing::ListingDraft;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;

/// My Events page controller
pub struct MyEventsController {
    entities: AppEntities,
}

impl MyEventsController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Open the add-event modal
    pub fn open_add(&self, cx: &mut App) {
        self.entities.my_events.update(cx, |state, cx| {
            state.open_add();
            cx.notify();
        });
    }

    /// Close the add-event modal, discarding the draft
    pub fn cancel_add(&self, cx: &mut App) {
        self.entities.my_events.update(cx, |state, cx| {
            state.cancel_add();
            cx.notify();
        });
    }

    /// Submit the add-event form
    pub fn submit(&self, draft: ListingDraft, cx: &mut App) {
        let validation = draft.validate();

        let taken = self.entities.my_events.update(cx, |state, cx| {
            state.draft = draft;
            let taken = state.take_valid_draft();
            cx.notify();
            taken
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            match taken {
                Some(draft) => hub.submit_listing(draft),
                None => {
                    let reason = validation
                        .err()
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    hub.log(AppEvent::warn(format!("Event form rejected: {reason}")));
                }
            }
        }
    }

    /// Delete one of the promoter's listings
    pub fn delete(&self, id: &str, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.delete_listing(id);
        }
    }

    /// Edit placeholder
    pub fn edit(&self, title: &str, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info(format!("Editing event: {title}")));
        }
    }

    /// Share placeholder
    pub fn share(&self, title: &str, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info(format!("Sharing event: {title}")));
        }
    }
}
