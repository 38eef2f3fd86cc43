//! Projection - Region Coordinates to Panel Coordinates
//!
//! Maps a lat/lng coordinate inside a region onto a panel of the given pixel
//! size. Equirectangular: good enough at city scale.

use crate::domain::venue::MapRegion;

/// Project a coordinate onto a panel, returning pixel offsets from the
/// panel's top-left corner. `None` when the coordinate is outside the region.
pub fn project(
    region: &MapRegion,
    latitude: f64,
    longitude: f64,
    width: f32,
    height: f32,
) -> Option<(f32, f32)> {
    if !region.contains(latitude, longitude) {
        return None;
    }

    let west = region.longitude - region.longitude_delta / 2.0;
    let north = region.latitude + region.latitude_delta / 2.0;

    let x = (longitude - west) / region.longitude_delta * width as f64;
    // Latitude grows northward, pixel y grows downward
    let y = (north - latitude) / region.latitude_delta * height as f64;

    Some((x as f32, y as f32))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn region() -> MapRegion {
        MapRegion {
            latitude: 50.0,
            longitude: -120.0,
            latitude_delta: 1.0,
            longitude_delta: 2.0,
        }
    }

    #[test]
    fn test_center_projects_to_panel_center() {
        let (x, y) = project(&region(), 50.0, -120.0, 400.0, 200.0).unwrap();
        assert!((x - 200.0).abs() < 0.001);
        assert!((y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_northwest_corner_projects_to_origin() {
        let (x, y) = project(&region(), 50.5, -121.0, 400.0, 200.0).unwrap();
        assert!((x - 0.0).abs() < 0.001);
        assert!((y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_outside_region_is_none() {
        assert!(project(&region(), 52.0, -120.0, 400.0, 200.0).is_none());
    }
}
