//! Catalog - Injected Data Source
//!
//! The catalog is the single collaborator supplying domain data to the UI.
//! The prototype ships an in-memory sample catalog; a production build would
//! swap in a network-backed implementation behind the same trait.

use crate::domain::listing::Listing;
use crate::domain::promoter::{
    Agreement, HostedEvent, PromoterProfile, PromoterStats,
};
use crate::domain::subscription::{
    Promotion, Rewards, Subscription, SubscriptionEvent,
};
use crate::domain::venue::VenuePin;

/// Source of all domain data shown in the app
pub trait CatalogSource: Send + Sync {
    /// Published listings for the events feed
    fn listings(&self) -> Vec<Listing>;
    /// The signed-in promoter's own listings
    fn my_events(&self) -> Vec<Listing>;
    /// Promoters the user is subscribed to
    fn subscriptions(&self) -> Vec<Subscription>;
    /// The signed-in promoter's profile
    fn promoter_profile(&self) -> PromoterProfile;
    /// Venue pins for the map
    fn venues(&self) -> Vec<VenuePin>;
}

/// In-memory sample catalog
pub struct SampleCatalog;

impl CatalogSource for SampleCatalog {
    fn listings(&self) -> Vec<Listing> {
        vec![
            Listing::new("1", "Fifa Tournament", "Gaming Club", "TRU Campus", "Games", "Tonight, 8 PM"),
            Listing::new("2", "Live Music Night", "Nightshift", "Downtown Venue", "Music", "Friday, 9 PM"),
            Listing::new("3", "Coding Workshop", "CS Club", "TRU Campus", "Study", "Saturday, 2 PM"),
            Listing::new("4", "Open Mic Night", "Campus Clubs", "Student Union", "Music", "Sunday, 7 PM"),
            Listing::new("5", "Basketball Pickup Game", "Intramural Sports", "TRU Gym", "Sports", "Monday, 6 PM"),
            Listing::new("6", "Trivia Night", "Nightshift", "Downtown Venue", "Games", "Friday, 9 PM"),
        ]
    }

    fn my_events(&self) -> Vec<Listing> {
        vec![
            Listing::new("me1", "My Poker Night", "Nightshift at 5th", "Sahali", "Games", "Oct 2, 8 PM"),
            Listing::new("me2", "Study Group - CS25", "Nightshift at 5th", "TRU Campus", "Study", "Oct 4, 6 PM"),
            Listing::new("me3", "Open Mic I'm Hosting", "Nightshift at 5th", "North Shore", "Music", "Oct 12, 7 PM"),
        ]
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![
            Subscription {
                id: "sub1".to_string(),
                name: "Nightshift at 5th".to_string(),
                price: "$20/month".to_string(),
                is_pro: true,
                events: vec![
                    SubscriptionEvent {
                        id: "e1".to_string(),
                        title: "DJ Set: Techno Night".to_string(),
                        date: "Dec 1, 9 PM".to_string(),
                    },
                    SubscriptionEvent {
                        id: "e2".to_string(),
                        title: "Live Music: Indie Rock".to_string(),
                        date: "Dec 8, 10 PM".to_string(),
                    },
                ],
                promotions: vec![
                    Promotion {
                        id: "p1".to_string(),
                        title: "Free entry for subscribers".to_string(),
                        description: Some("Show your sub status at the door.".to_string()),
                    },
                    Promotion {
                        id: "p2".to_string(),
                        title: "Half-price cocktails".to_string(),
                        description: Some("Redeem at the bar with QR code.".to_string()),
                    },
                ],
                rewards: Some(Rewards {
                    current_points: 25,
                    redeemed_points: 100,
                    total_drinks_bought: 12,
                }),
            },
            Subscription {
                id: "sub2".to_string(),
                name: "Campus Clubs".to_string(),
                price: "Free".to_string(),
                is_pro: false,
                events: vec![
                    SubscriptionEvent {
                        id: "e3".to_string(),
                        title: "Annual Club Fair".to_string(),
                        date: "Dec 5, 6 PM".to_string(),
                    },
                    SubscriptionEvent {
                        id: "e4".to_string(),
                        title: "Holiday Mixer".to_string(),
                        date: "Dec 12, 5 PM".to_string(),
                    },
                ],
                promotions: vec![Promotion {
                    id: "p3".to_string(),
                    title: "Free club t-shirt".to_string(),
                    description: None,
                }],
                rewards: None,
            },
        ]
    }

    fn promoter_profile(&self) -> PromoterProfile {
        PromoterProfile {
            name: "Jane Doe".to_string(),
            business_name: "Nightshift at 5th".to_string(),
            bio: "Your number one destination for nightlife in Kamloops! \
                  Offering live music, DJ sets, and special events every week."
                .to_string(),
            stats: PromoterStats {
                total_subscribers: 154,
                events_hosted: 28,
                average_attendance: 120,
                total_revenue: "$3,080".to_string(),
            },
            events: vec![
                HostedEvent {
                    id: "e1".to_string(),
                    title: "DJ Babyface Performing".to_string(),
                    date: "Dec 1, 2025".to_string(),
                },
                HostedEvent {
                    id: "e2".to_string(),
                    title: "TRU Cheerleading Party".to_string(),
                    date: "Dec 8, 2025".to_string(),
                },
                HostedEvent {
                    id: "e3".to_string(),
                    title: "New Years Countdown".to_string(),
                    date: "Dec 31, 2025".to_string(),
                },
            ],
            agreements: vec![
                Agreement {
                    id: "c1".to_string(),
                    title: "Customer Code of Conduct".to_string(),
                },
                Agreement {
                    id: "c2".to_string(),
                    title: "Subscription Terms & Conditions".to_string(),
                },
            ],
        }
    }

    fn venues(&self) -> Vec<VenuePin> {
        vec![
            VenuePin {
                id: "1".to_string(),
                title: "Nightshift".to_string(),
                latitude: 50.6750,
                longitude: -120.3450,
            },
            VenuePin {
                id: "2".to_string(),
                title: "TRU Campus Event".to_string(),
                latitude: 50.6725,
                longitude: -120.3685,
            },
            VenuePin {
                id: "3".to_string(),
                title: "Campus Clubs Office".to_string(),
                latitude: 50.6710,
                longitude: -120.3650,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_listings_have_unique_ids() {
        let listings = SampleCatalog.listings();
        let mut ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), listings.len());
    }

    #[test]
    fn test_sample_catalog_is_populated() {
        let catalog = SampleCatalog;
        assert_eq!(catalog.listings().len(), 6);
        assert_eq!(catalog.my_events().len(), 3);
        assert_eq!(catalog.subscriptions().len(), 2);
        assert_eq!(catalog.venues().len(), 3);
        assert_eq!(catalog.promoter_profile().name, "Jane Doe");
    }
}
