use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::stores::{StoreEntity, UpdateStoreDetailsEntity};

#[automock]
#[async_trait]
pub trait StoreRepository {
    /// All stores in insertion order, whatever their status.
    async fn list_stores(&self) -> Result<Vec<StoreEntity>>;

    async fn find_by_id(&self, store_id: Uuid) -> Result<Option<StoreEntity>>;

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Option<StoreEntity>>;

    /// Returns `None` when the store does not exist.
    async fn update_details(
        &self,
        store_id: Uuid,
        details: UpdateStoreDetailsEntity,
    ) -> Result<Option<StoreEntity>>;
}
