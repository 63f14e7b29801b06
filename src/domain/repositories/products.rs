use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::products::{InsertProductEntity, ProductEntity, UpdateProductEntity};

#[automock]
#[async_trait]
pub trait ProductRepository {
    async fn list_products(&self) -> Result<Vec<ProductEntity>>;

    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<ProductEntity>>;

    async fn find_by_id(&self, product_id: Uuid) -> Result<Option<ProductEntity>>;

    async fn insert(&self, product: InsertProductEntity) -> Result<ProductEntity>;

    /// Replaces the product's fields if it exists and belongs to `store_id`.
    async fn update(
        &self,
        store_id: Uuid,
        product_id: Uuid,
        product: UpdateProductEntity,
    ) -> Result<Option<ProductEntity>>;

    /// Returns false when no product with that id belongs to `store_id`.
    async fn delete(&self, store_id: Uuid, product_id: Uuid) -> Result<bool>;
}
