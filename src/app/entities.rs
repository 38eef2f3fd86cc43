//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! This pattern avoids "monolith state" by splitting state by update frequency.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{
    listings_state::ListingsState, log_state::LogState, map_state::MapState,
    my_events_state::MyEventsState, profile_state::ProfileState,
    subscriptions_state::SubscriptionsState, tabs_state::TabsState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Tab navigation state
    pub tabs: Entity<TabsState>,
    /// Events feed with its filter controller
    pub listings: Entity<ListingsState>,
    /// Promoter's own events and the add-event form
    pub my_events: Entity<MyEventsState>,
    /// Subscribed promoters
    pub subscriptions: Entity<SubscriptionsState>,
    /// Promoter profile
    pub profile: Entity<ProfileState>,
    /// Venue map pins and region
    pub map: Entity<MapState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            tabs: cx.new(|_| TabsState::default()),
            listings: cx.new(|_| ListingsState::default()),
            my_events: cx.new(|_| MyEventsState::default()),
            subscriptions: cx.new(|_| SubscriptionsState::default()),
            profile: cx.new(|_| ProfileState::default()),
            map: cx.new(|_| MapState::default()),
            logs: cx.new(|_| LogState::new(1000)),
        }
    }
}
