use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    domain::{
        entities::{
            payments::{InsertPaymentEntity, PaymentEntity},
            subscriptions::SubscriptionEntity,
        },
        repositories::subscriptions::SubscriptionRepository,
        value_objects::{enums::store_statuses::StoreStatus, subscriptions::SubscriptionState},
    },
    infrastructure::memory::memory_connection::MemoryPoolSquad,
};

pub struct SubscriptionMemory {
    db_pool: Arc<MemoryPoolSquad>,
}

impl SubscriptionMemory {
    pub fn new(db_pool: Arc<MemoryPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionMemory {
    async fn list_subscriptions(&self) -> Result<Vec<SubscriptionEntity>> {
        let tables = self.db_pool.read().await;
        Ok(tables.subscriptions.clone())
    }

    async fn find_by_store_id(&self, store_id: Uuid) -> Result<Option<SubscriptionEntity>> {
        let tables = self.db_pool.read().await;
        Ok(tables
            .subscriptions
            .iter()
            .find(|s| s.store_id == store_id)
            .cloned())
    }

    async fn expire_trial(&self, store_id: Uuid) -> Result<()> {
        let mut tables = self.db_pool.write().await;

        // Re-checked under the write lock: a payment may have landed since the caller read.
        let Some(subscription) = tables
            .subscriptions
            .iter_mut()
            .find(|s| s.store_id == store_id)
        else {
            return Ok(());
        };
        if !matches!(subscription.state, SubscriptionState::Trial { .. }) {
            return Ok(());
        }
        subscription.state = SubscriptionState::Expired;

        if let Some(store) = tables.stores.iter_mut().find(|s| s.id == store_id) {
            store.status = StoreStatus::Suspended;
        }

        Ok(())
    }

    async fn activate_after_payment(
        &self,
        store_id: Uuid,
        expires: DateTime<Utc>,
        payment: InsertPaymentEntity,
    ) -> Result<Option<PaymentEntity>> {
        let mut guard = self.db_pool.write().await;
        let tables = &mut *guard;

        let Some(store) = tables.stores.iter_mut().find(|s| s.id == store_id) else {
            return Ok(None);
        };
        store.status = StoreStatus::Active;

        let state = SubscriptionState::Active { expires };
        match tables
            .subscriptions
            .iter()
            .position(|s| s.store_id == store_id)
        {
            Some(index) => tables.subscriptions[index].state = state,
            None => tables.subscriptions.push(SubscriptionEntity { store_id, state }),
        }

        let payment = PaymentEntity {
            id: Uuid::new_v4(),
            store_id,
            amount_minor: payment.amount_minor,
            method: payment.method,
            status: payment.status,
            paid_at: payment.paid_at,
        };
        tables.payments.push(payment.clone());

        Ok(Some(payment))
    }
}
