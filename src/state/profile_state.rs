//! ProfileState - Promoter Profile

use crate::domain::promoter::PromoterProfile;

/// State for the promoter profile page
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    /// The signed-in promoter's profile
    pub profile: PromoterProfile,
    /// Whether data is loading
    pub loading: bool,
}

impl ProfileState {
    /// Replace the profile
    pub fn update_profile(&mut self, profile: PromoterProfile) {
        self.profile = profile;
        self.loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
