//! Address Locator - address book service with proximity queries
//!
//! Stores postal addresses with coordinates and answers "which addresses lie
//! within N kilometers of this point" with a linear great-circle scan.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{within_distance, DistanceMethod, ProximityError, ProximityFilter};
pub use models::{Address, AddressInput};
pub use services::{AddressStore, InMemoryStore, PostgresStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let nearby = within_distance(40.7128, -74.0060, 10.0, Vec::new()).unwrap();
        assert!(nearby.is_empty());
    }
}
