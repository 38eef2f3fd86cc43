//! Venue - Map Pins and Region

use serde::{Deserialize, Serialize};

/// A venue marker on the event map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenuePin {
    pub id: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The visible map region: center plus half-span in each direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Whether a coordinate falls inside the region
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        let half_lat = self.latitude_delta / 2.0;
        let half_lng = self.longitude_delta / 2.0;
        (latitude - self.latitude).abs() <= half_lat
            && (longitude - self.longitude).abs() <= half_lng
    }
}

impl Default for MapRegion {
    fn default() -> Self {
        // Downtown Kamloops
        Self {
            latitude: 50.6718,
            longitude: -120.3429,
            latitude_delta: 0.05,
            longitude_delta: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains_center() {
        let region = MapRegion::default();
        assert!(region.contains(region.latitude, region.longitude));
    }

    #[test]
    fn test_region_excludes_far_point() {
        let region = MapRegion::default();
        assert!(!region.contains(51.0, -121.0));
    }
}
