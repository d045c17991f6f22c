// Core algorithm exports
pub mod distance;
pub mod proximity;

pub use distance::{geodesic_distance, haversine_distance, DistanceMethod};
pub use proximity::{validate_coordinates, validate_radius, within_distance, ProximityError, ProximityFilter};
