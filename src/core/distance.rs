use geo::{GeodesicDistance, Point};
use serde::{Deserialize, Serialize};

/// Earth's mean radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1.0 near antipodes
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculate the WGS-84 geodesic distance between two points in kilometers
///
/// Uses Karney's algorithm as implemented by `geo`. Note that `geo` points
/// are `(x, y)` = `(longitude, latitude)`.
#[inline]
pub fn geodesic_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let origin = Point::new(lon1, lat1);
    let target = Point::new(lon2, lat2);

    origin.geodesic_distance(&target) / 1000.0
}

/// Great-circle metric used by the proximity filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMethod {
    /// Ellipsoidal (WGS-84) geodesic
    #[default]
    Geodesic,
    /// Spherical haversine
    Haversine,
}

impl DistanceMethod {
    /// Distance between two points in kilometers using this metric
    #[inline]
    pub fn distance_km(self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        match self {
            DistanceMethod::Geodesic => geodesic_distance(lat1, lon1, lat2, lon2),
            DistanceMethod::Haversine => haversine_distance(lat1, lon1, lat2, lon2),
        }
    }
}

impl std::fmt::Display for DistanceMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceMethod::Geodesic => write!(f, "geodesic"),
            DistanceMethod::Haversine => write!(f, "haversine"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london_lat = 51.5074;
        let london_lon = -0.1278;
        let paris_lat = 48.8566;
        let paris_lon = 2.3522;

        let distance = haversine_distance(london_lat, london_lon, paris_lat, paris_lon);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_geodesic_distance() {
        let distance = geodesic_distance(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        // WGS-84 equatorial degree is ~111.32 km, the sphere gives ~111.19 km
        let geodesic = geodesic_distance(0.0, 0.0, 0.0, 1.0);
        let haversine = haversine_distance(0.0, 0.0, 0.0, 1.0);

        assert!((geodesic - 111.32).abs() < 0.05, "got {}", geodesic);
        assert!((haversine - 111.19).abs() < 0.05, "got {}", haversine);
    }

    #[test]
    fn test_identical_points_are_zero() {
        for method in [DistanceMethod::Geodesic, DistanceMethod::Haversine] {
            assert!(method.distance_km(40.7128, -74.0060, 40.7128, -74.0060).abs() < 1e-9);
        }
    }

    #[test]
    fn test_haversine_antipodes_are_finite() {
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lon = -180.0;
            while lon < 180.0 {
                let antipode_lon = if lon <= 0.0 { lon + 180.0 } else { lon - 180.0 };
                let distance = haversine_distance(lat, lon, -lat, antipode_lon);
                assert!(distance.is_finite(), "NaN at ({}, {})", lat, lon);
                assert!(distance <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-9);
                lon += 1.0;
            }
            lat += 0.5;
        }
    }

    #[test]
    fn test_method_parses_lowercase() {
        let method: DistanceMethod = serde_json::from_str("\"haversine\"").unwrap();
        assert_eq!(method, DistanceMethod::Haversine);
        assert_eq!(DistanceMethod::default().to_string(), "geodesic");
    }
}
