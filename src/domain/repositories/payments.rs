use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::payments::PaymentEntity;

#[automock]
#[async_trait]
pub trait PaymentRepository {
    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<PaymentEntity>>;
}
