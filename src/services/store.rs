use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Address, AddressInput};

/// Errors that can occur when reading or writing addresses
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Address not found: {0}")]
    NotFound(i64),
}

/// Persistence collaborator for address records
#[async_trait]
pub trait AddressStore: Send + Sync + 'static {
    /// Insert a new address and return it with its assigned id
    async fn create(&self, input: AddressInput) -> Result<Address, StoreError>;

    async fn get(&self, id: i64) -> Result<Address, StoreError>;

    /// Replace every field of an existing address
    async fn update(&self, id: i64, input: AddressInput) -> Result<Address, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// One page of addresses ordered by id
    async fn list(&self, skip: u32, limit: u32) -> Result<Vec<Address>, StoreError>;

    /// Every stored address ordered by id
    async fn list_all(&self) -> Result<Vec<Address>, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
