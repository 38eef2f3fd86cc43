//! PromoterProfile - Business Profile Data

use serde::{Deserialize, Serialize};

/// Aggregate statistics shown on the promoter dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromoterStats {
    pub total_subscribers: u32,
    pub events_hosted: u32,
    pub average_attendance: u32,
    /// Display label, e.g. "$3,080"
    pub total_revenue: String,
}

/// An event hosted by the promoter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedEvent {
    pub id: String,
    pub title: String,
    pub date: String,
}

/// A customer agreement document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agreement {
    pub id: String,
    pub title: String,
}

/// A promoter (business) profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromoterProfile {
    /// Account holder name
    pub name: String,
    /// Business name
    pub business_name: String,
    /// Business bio / pitch
    pub bio: String,
    pub stats: PromoterStats,
    pub events: Vec<HostedEvent>,
    pub agreements: Vec<Agreement>,
}
