//! SubscriptionsState - User Subscriptions

use crate::domain::subscription::Subscription;

/// State for the subscriptions page
#[derive(Debug, Clone, Default)]
pub struct SubscriptionsState {
    /// Promoters the user is subscribed to
    pub subscriptions: Vec<Subscription>,
    /// Whether data is loading
    pub loading: bool,
}

impl SubscriptionsState {
    /// Replace the subscription list
    pub fn update_subscriptions(&mut self, subscriptions: Vec<Subscription>) {
        self.subscriptions = subscriptions;
        self.loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
