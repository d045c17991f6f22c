use thiserror::Error;

use crate::core::distance::DistanceMethod;
use crate::models::Address;

/// Slack allowed when comparing a distance against the radius, in kilometers
pub const DISTANCE_TOLERANCE_KM: f64 = 1e-9;

/// Errors produced by the proximity filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProximityError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Reject latitudes outside [-90, 90] and longitudes outside [-180, 180]
///
/// NaN fails both range checks.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ProximityError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ProximityError::InvalidInput(format!(
            "latitude must be within [-90, 90], got {}",
            latitude
        )));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ProximityError::InvalidInput(format!(
            "longitude must be within [-180, 180], got {}",
            longitude
        )));
    }

    Ok(())
}

/// Reject negative, NaN and infinite radii
pub fn validate_radius(radius_km: f64) -> Result<(), ProximityError> {
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(ProximityError::InvalidInput(format!(
            "radius must be a finite, non-negative number of kilometers, got {}",
            radius_km
        )));
    }

    Ok(())
}

/// Linear great-circle radius filter over already-fetched addresses
#[derive(Debug, Clone, Copy, Default)]
pub struct ProximityFilter {
    method: DistanceMethod,
}

impl ProximityFilter {
    pub fn new(method: DistanceMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> DistanceMethod {
        self.method
    }

    /// Keep the addresses within `radius_km` of the origin, in input order
    ///
    /// # Errors
    /// `InvalidInput` if the origin is out of range or the radius is
    /// negative or not finite.
    pub fn filter(
        &self,
        origin_lat: f64,
        origin_lon: f64,
        radius_km: f64,
        addresses: Vec<Address>,
    ) -> Result<Vec<Address>, ProximityError> {
        validate_coordinates(origin_lat, origin_lon)?;
        validate_radius(radius_km)?;

        let scanned = addresses.len();
        let nearby: Vec<Address> = addresses
            .into_iter()
            .filter(|address| {
                let distance_km = self.method.distance_km(
                    origin_lat,
                    origin_lon,
                    address.latitude,
                    address.longitude,
                );
                distance_km <= radius_km + DISTANCE_TOLERANCE_KM
            })
            .collect();

        tracing::debug!(
            "Proximity filter ({}) kept {} of {} addresses within {} km of ({}, {})",
            self.method,
            nearby.len(),
            scanned,
            radius_km,
            origin_lat,
            origin_lon
        );

        Ok(nearby)
    }
}

/// Addresses within `radius_km` kilometers of the origin by geodesic distance
pub fn within_distance(
    origin_lat: f64,
    origin_lon: f64,
    radius_km: f64,
    addresses: Vec<Address>,
) -> Result<Vec<Address>, ProximityError> {
    ProximityFilter::default().filter(origin_lat, origin_lon, radius_km, addresses)
}
