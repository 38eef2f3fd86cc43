//! Features - Pages and Their Controllers

pub mod events;
pub mod map;
pub mod my_events;
pub mod profile;
pub mod subscriptions;
