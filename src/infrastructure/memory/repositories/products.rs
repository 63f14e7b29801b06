use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::{
        entities::products::{InsertProductEntity, ProductEntity, UpdateProductEntity},
        repositories::products::ProductRepository,
    },
    infrastructure::memory::memory_connection::MemoryPoolSquad,
};

pub struct ProductMemory {
    db_pool: Arc<MemoryPoolSquad>,
}

impl ProductMemory {
    pub fn new(db_pool: Arc<MemoryPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ProductRepository for ProductMemory {
    async fn list_products(&self) -> Result<Vec<ProductEntity>> {
        let tables = self.db_pool.read().await;
        Ok(tables.products.clone())
    }

    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<ProductEntity>> {
        let tables = self.db_pool.read().await;
        Ok(tables
            .products
            .iter()
            .filter(|p| p.store_id == store_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, product_id: Uuid) -> Result<Option<ProductEntity>> {
        let tables = self.db_pool.read().await;
        Ok(tables.products.iter().find(|p| p.id == product_id).cloned())
    }

    async fn insert(&self, product: InsertProductEntity) -> Result<ProductEntity> {
        let product = ProductEntity {
            id: Uuid::new_v4(),
            store_id: product.store_id,
            name: product.name,
            description: product.description,
            price_minor: product.price_minor,
            images: product.images,
            quantity: product.quantity,
            status: product.status,
            created_at: product.created_at,
        };

        let mut tables = self.db_pool.write().await;
        tables.products.push(product.clone());

        Ok(product)
    }

    async fn update(
        &self,
        store_id: Uuid,
        product_id: Uuid,
        product: UpdateProductEntity,
    ) -> Result<Option<ProductEntity>> {
        let mut tables = self.db_pool.write().await;
        let Some(row) = tables
            .products
            .iter_mut()
            .find(|p| p.id == product_id && p.store_id == store_id)
        else {
            return Ok(None);
        };

        row.name = product.name;
        row.description = product.description;
        row.price_minor = product.price_minor;
        row.images = product.images;
        row.quantity = product.quantity;
        row.status = product.status;

        Ok(Some(row.clone()))
    }

    async fn delete(&self, store_id: Uuid, product_id: Uuid) -> Result<bool> {
        let mut tables = self.db_pool.write().await;
        let before = tables.products.len();
        tables
            .products
            .retain(|p| !(p.id == product_id && p.store_id == store_id));

        Ok(tables.products.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        domain::value_objects::enums::product_statuses::ProductStatus,
        infrastructure::memory::memory_connection::establish_connection,
    };

    fn tomatoes(store_id: Uuid) -> InsertProductEntity {
        InsertProductEntity {
            store_id,
            name: "طماطم".to_string(),
            description: String::new(),
            price_minor: 12_000,
            images: vec![],
            quantity: 50,
            status: ProductStatus::InStock,
            created_at: Utc::now(),
        }
    }

    fn edit(quantity: u32) -> UpdateProductEntity {
        UpdateProductEntity {
            name: "طماطم".to_string(),
            description: String::new(),
            price_minor: 12_000,
            images: vec![],
            quantity,
            status: ProductStatus::from_quantity(quantity),
        }
    }

    #[tokio::test]
    async fn update_of_unknown_product_leaves_rows_unchanged() {
        let repo = ProductMemory::new(Arc::new(establish_connection()));
        let store_id = Uuid::new_v4();
        let inserted = repo.insert(tomatoes(store_id)).await.unwrap();

        let result = repo.update(store_id, Uuid::new_v4(), edit(0)).await.unwrap();

        assert!(result.is_none());
        assert_eq!(repo.list_products().await.unwrap(), vec![inserted]);
    }

    #[tokio::test]
    async fn update_and_delete_are_scoped_to_the_owning_store() {
        let repo = ProductMemory::new(Arc::new(establish_connection()));
        let store_id = Uuid::new_v4();
        let other_store = Uuid::new_v4();
        let inserted = repo.insert(tomatoes(store_id)).await.unwrap();

        assert!(repo.update(other_store, inserted.id, edit(5)).await.unwrap().is_none());
        assert!(!repo.delete(other_store, inserted.id).await.unwrap());

        let updated = repo.update(store_id, inserted.id, edit(5)).await.unwrap().unwrap();
        assert_eq!(updated.status, ProductStatus::LowStock);
        assert_eq!(updated.created_at, inserted.created_at);

        assert!(repo.delete(store_id, inserted.id).await.unwrap());
        assert!(repo.list_by_store(store_id).await.unwrap().is_empty());
    }
}
