//! Great-circle distances between geographic coordinates.

use serde::Serialize;

/// Mean Earth radius in miles, shared by edge weights and heuristics.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance to another coordinate, in miles.
    ///
    /// Symmetric, zero for identical coordinates, and finite for any pair of
    /// finite inputs including antipodal points.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        // Float error can push `a` past 1.0 near antipodes; clamp keeps the
        // second square root real.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_MILES * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.05;

    #[test]
    fn distance_is_symmetric() {
        let wichita = Coordinate::new(37.6872, -97.3301);
        let topeka = Coordinate::new(39.0473, -95.6752);
        assert_eq!(wichita.distance_to(&topeka), topeka.distance_to(&wichita));
    }

    #[test]
    fn identical_coordinates_have_zero_distance() {
        let place = Coordinate::new(37.6872, -97.3301);
        assert_eq!(place.distance_to(&place), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_spans_about_sixty_nine_miles() {
        let south = Coordinate::new(0.0, 0.0);
        let north = Coordinate::new(1.0, 0.0);
        let expected = EARTH_RADIUS_MILES * 1.0_f64.to_radians();
        assert!((south.distance_to(&north) - expected).abs() < TOLERANCE);
    }

    #[test]
    fn antipodal_points_stay_finite() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let half_circumference = EARTH_RADIUS_MILES * std::f64::consts::PI;
        let distance = a.distance_to(&b);
        assert!(distance.is_finite());
        assert!((distance - half_circumference).abs() < TOLERANCE);

        let north = Coordinate::new(90.0, 0.0);
        let south = Coordinate::new(-90.0, 0.0);
        assert!((north.distance_to(&south) - half_circumference).abs() < TOLERANCE);
    }
}
