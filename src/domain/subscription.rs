//! Subscription - Promoter Subscription Data

use serde::{Deserialize, Serialize};

/// An event announced to subscribers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionEvent {
    pub id: String,
    pub title: String,
    pub date: String,
}

/// A promotion offered to subscribers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: String,
    pub title: String,
    /// Redemption detail; not every promotion has one
    pub description: Option<String>,
}

/// Loyalty rewards attached to a paid subscription
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rewards {
    pub current_points: u32,
    pub redeemed_points: u32,
    pub total_drinks_bought: u32,
}

/// A promoter the user is subscribed to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique ID
    pub id: String,
    /// Promoter name
    pub name: String,
    /// Price label (e.g. "$20/month", "Free")
    pub price: String,
    /// Paid tier flag
    pub is_pro: bool,
    /// Upcoming events from this promoter
    pub events: Vec<SubscriptionEvent>,
    /// Exclusive promotions
    pub promotions: Vec<Promotion>,
    /// Rewards, present on paid tiers only
    pub rewards: Option<Rewards>,
}
