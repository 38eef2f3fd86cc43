//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the UI layer.

use chrono::{DateTime, Local};

use crate::domain::listing::Listing;
use crate::domain::promoter::PromoterProfile;
use crate::domain::subscription::Subscription;
use crate::domain::venue::VenuePin;
use crate::state::log_state::LogLevel;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// Event feed loaded
    ListingsLoaded { listings: Vec<Listing> },

    /// Promoter's own events changed (load, submit, delete)
    MyEventsUpdated { events: Vec<Listing> },

    /// Subscriptions loaded
    SubscriptionsLoaded { subscriptions: Vec<Subscription> },

    /// Promoter profile loaded
    ProfileLoaded { profile: PromoterProfile },

    /// Venue pins loaded
    VenuesLoaded { pins: Vec<VenuePin> },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }
}
