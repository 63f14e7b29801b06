use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::{
        entities::stores::{StoreEntity, UpdateStoreDetailsEntity},
        repositories::stores::StoreRepository,
    },
    infrastructure::memory::memory_connection::MemoryPoolSquad,
};

pub struct StoreMemory {
    db_pool: Arc<MemoryPoolSquad>,
}

impl StoreMemory {
    pub fn new(db_pool: Arc<MemoryPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl StoreRepository for StoreMemory {
    async fn list_stores(&self) -> Result<Vec<StoreEntity>> {
        let tables = self.db_pool.read().await;
        Ok(tables.stores.clone())
    }

    async fn find_by_id(&self, store_id: Uuid) -> Result<Option<StoreEntity>> {
        let tables = self.db_pool.read().await;
        Ok(tables.stores.iter().find(|s| s.id == store_id).cloned())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Option<StoreEntity>> {
        let tables = self.db_pool.read().await;
        Ok(tables.stores.iter().find(|s| s.owner_id == owner_id).cloned())
    }

    async fn update_details(
        &self,
        store_id: Uuid,
        details: UpdateStoreDetailsEntity,
    ) -> Result<Option<StoreEntity>> {
        let mut tables = self.db_pool.write().await;
        let Some(store) = tables.stores.iter_mut().find(|s| s.id == store_id) else {
            return Ok(None);
        };

        if let Some(name) = details.name {
            store.name = name;
        }
        if let Some(description) = details.description {
            store.description = description;
        }
        if let Some(phone) = details.phone {
            store.phone = phone;
        }

        Ok(Some(store.clone()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::infrastructure::memory::memory_connection::establish_seeded_connection;

    #[tokio::test]
    async fn update_details_only_touches_given_fields() {
        let db_pool = Arc::new(establish_seeded_connection(Utc::now(), "fellah123").unwrap());
        let repo = StoreMemory::new(db_pool);
        let before = repo.list_stores().await.unwrap().remove(0);

        let after = repo
            .update_details(
                before.id,
                UpdateStoreDetailsEntity {
                    phone: Some("0550000001".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(after.phone, "0550000001");
        assert_eq!(after.name, before.name);
        assert_eq!(after.status, before.status);
        assert_eq!(repo.find_by_id(before.id).await.unwrap(), Some(after));
    }

    #[tokio::test]
    async fn update_details_on_unknown_store_is_none() {
        let db_pool = Arc::new(establish_seeded_connection(Utc::now(), "fellah123").unwrap());
        let repo = StoreMemory::new(db_pool);

        let result = repo
            .update_details(Uuid::new_v4(), UpdateStoreDetailsEntity::default())
            .await
            .unwrap();

        assert!(result.is_none());
    }
}
