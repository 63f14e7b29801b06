use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::{entities::payments::PaymentEntity, repositories::payments::PaymentRepository},
    infrastructure::memory::memory_connection::MemoryPoolSquad,
};

pub struct PaymentMemory {
    db_pool: Arc<MemoryPoolSquad>,
}

impl PaymentMemory {
    pub fn new(db_pool: Arc<MemoryPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PaymentRepository for PaymentMemory {
    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<PaymentEntity>> {
        let tables = self.db_pool.read().await;
        Ok(tables
            .payments
            .iter()
            .filter(|p| p.store_id == store_id)
            .cloned()
            .collect())
    }
}
