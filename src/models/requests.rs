use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::AddressInput;

/// Request body for creating or replacing an address
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddressRequest {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl From<AddressRequest> for AddressInput {
    fn from(req: AddressRequest) -> Self {
        Self {
            street: req.street,
            city: req.city,
            state: req.state,
            country: req.country,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}

/// Offset/limit query for listing addresses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAddressesQuery {
    #[serde(default)]
    pub skip: u32,
    pub limit: Option<u32>,
}

/// Query for the proximity endpoint; `distance` is a radius in kilometers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithinDistanceQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub distance: f64,
}
