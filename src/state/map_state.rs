//! MapState - Venue Map State

use crate::domain::venue::{MapRegion, VenuePin};

/// State for the venue map page
#[derive(Debug, Clone, Default)]
pub struct MapState {
    /// Venue pins to render
    pub pins: Vec<VenuePin>,
    /// Visible region
    pub region: MapRegion,
    /// Whether data is loading
    pub loading: bool,
}

impl MapState {
    /// Replace the pin set
    pub fn update_pins(&mut self, pins: Vec<VenuePin>) {
        self.pins = pins;
        self.loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Recenter the region, keeping the span
    pub fn set_center(&mut self, latitude: f64, longitude: f64) {
        self.region.latitude = latitude;
        self.region.longitude = longitude;
    }

    /// Pins inside the visible region
    pub fn visible_pins(&self) -> Vec<&VenuePin> {
        self.pins
            .iter()
            .filter(|p| self.region.contains(p.latitude, p.longitude))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_pins_respects_region() {
        let mut state = MapState::default();
        state.update_pins(vec![
            VenuePin {
                id: "1".to_string(),
                title: "Nightshift".to_string(),
                latitude: 50.6750,
                longitude: -120.3450,
            },
            VenuePin {
                id: "2".to_string(),
                title: "Far Away".to_string(),
                latitude: 49.0,
                longitude: -123.0,
            },
        ]);

        let visible = state.visible_pins();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Nightshift");
    }
}
