// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Address, AddressInput};
pub use requests::{AddressRequest, ListAddressesQuery, WithinDistanceQuery};
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse};
