//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod filter_state;
pub mod listings_state;
pub mod log_state;
pub mod map_state;
pub mod my_events_state;
pub mod profile_state;
pub mod subscriptions_state;
pub mod tabs_state;
