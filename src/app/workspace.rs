//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace is the main container holding the active page, the bottom
//! tab bar, and the debug log panel. It also manages the event pump that
//! bridges service events to UI updates.

use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::log_panel::LogPanel;
use crate::components::layout::tab_bar::TabBar;
use crate::eventing::app_event::AppEvent;
use crate::features::events::page::EventsPage;
use crate::features::map::page::MapPage;
use crate::features::my_events::page::MyEventsPage;
use crate::features::profile::page::ProfilePage;
use crate::features::subscriptions::page::SubscriptionsPage;
use crate::theme::colors::CepColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    tab_bar: Entity<TabBar>,
    log_panel: Entity<LogPanel>,
    // Page views (created lazily and cached)
    events_page: Option<Entity<EventsPage>>,
    my_events_page: Option<Entity<MyEventsPage>>,
    subscriptions_page: Option<Entity<SubscriptionsPage>>,
    map_page: Option<Entity<MapPage>>,
    profile_page: Option<Entity<ProfilePage>>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Create layout components
        let tab_bar = cx.new(|cx| TabBar::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        // Events feed is the landing page
        let events_page = Some(cx.new(|cx| EventsPage::new(entities.clone(), cx)));

        // Start event pump
        Self::start_event_pump(event_rx, entities.clone(), cx);

        // Observe tabs state for page changes
        cx.observe(&entities.tabs, |_this, _, cx| {
            cx.notify();
        })
        .detach();

        // Re-render when the log panel toggles
        cx.observe(&entities.logs, |_this, _, cx| {
            cx.notify();
        })
        .detach();

        Self {
            entities,
            tab_bar,
            log_panel,
            events_page,
            my_events_page: None,
            subscriptions_page: None,
            map_page: None,
            profile_page: None,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    /// Get or create a page view for the given page
    fn get_or_create_page(&mut self, page: ActivePage, cx: &mut Context<Self>) -> impl IntoElement {
        match page {
            ActivePage::Events => {
                let entity = self.events_page.get_or_insert_with(|| {
                    cx.new(|cx| EventsPage::new(self.entities.clone(), cx))
                });
                entity.clone().into_any_element()
            }
            ActivePage::MyEvents => {
                let entity = self.my_events_page.get_or_insert_with(|| {
                    cx.new(|cx| MyEventsPage::new(self.entities.clone(), cx))
                });
                entity.clone().into_any_element()
            }
            ActivePage::Subscriptions => {
                let entity = self.subscriptions_page.get_or_insert_with(|| {
                    cx.new(|cx| SubscriptionsPage::new(self.entities.clone(), cx))
                });
                entity.clone().into_any_element()
            }
            ActivePage::Map => {
                let entity = self
                    .map_page
                    .get_or_insert_with(|| cx.new(|cx| MapPage::new(self.entities.clone(), cx)));
                entity.clone().into_any_element()
            }
            ActivePage::Profile => {
                let entity = self.profile_page.get_or_insert_with(|| {
                    cx.new(|cx| ProfilePage::new(self.entities.clone(), cx))
                });
                entity.clone().into_any_element()
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.tabs.read(cx).active_page;
        let show_logs = self.entities.logs.read(cx).visible;
        let content = self.get_or_create_page(active_page, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(CepColors::background())
            .child(
                // Active page
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(content),
            )
            .when(show_logs, |el| el.child(self.log_panel.clone()))
            .child(
                // Bottom tab strip
                self.tab_bar.clone(),
            )
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log { level, message, timestamp } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::ListingsLoaded { listings } => {
            entities.listings.update(cx, |state, cx| {
                state.update_listings(listings);
                cx.notify();
            });
        }
        AppEvent::MyEventsUpdated { events } => {
            entities.my_events.update(cx, |state, cx| {
                state.update_events(events);
                cx.notify();
            });
        }
        AppEvent::SubscriptionsLoaded { subscriptions } => {
            entities.subscriptions.update(cx, |state, cx| {
                state.update_subscriptions(subscriptions);
                cx.notify();
            });
        }
        AppEvent::ProfileLoaded { profile } => {
            entities.profile.update(cx, |state, cx| {
                state.update_profile(profile);
                cx.notify();
            });
        }
        AppEvent::VenuesLoaded { pins } => {
            entities.map.update(cx, |state, cx| {
                state.update_pins(pins);
                cx.notify();
            });
        }
    }
}
