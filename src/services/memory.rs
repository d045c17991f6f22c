use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::{Address, AddressInput};
use crate::services::store::{AddressStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    addresses: BTreeMap<i64, Address>,
}

/// Process-local address store
///
/// Ids start at 1 and are never reused. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AddressStore for InMemoryStore {
    async fn create(&self, input: AddressInput) -> Result<Address, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let address = Address::from_input(inner.next_id, input);
        inner.addresses.insert(address.id, address.clone());
        Ok(address)
    }

    async fn get(&self, id: i64) -> Result<Address, StoreError> {
        self.inner
            .read()
            .await
            .addresses
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: i64, input: AddressInput) -> Result<Address, StoreError> {
        let mut inner = self.inner.write().await;
        let address = inner.addresses.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        address.apply(input);
        Ok(address.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .addresses
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, skip: u32, limit: u32) -> Result<Vec<Address>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .addresses
            .values()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Address>, StoreError> {
        Ok(self.inner.read().await.addresses.values().cloned().collect())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
