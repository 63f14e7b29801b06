use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::{
    payments::{InsertPaymentEntity, PaymentEntity},
    subscriptions::SubscriptionEntity,
};

#[automock]
#[async_trait]
pub trait SubscriptionRepository {
    async fn list_subscriptions(&self) -> Result<Vec<SubscriptionEntity>>;

    async fn find_by_store_id(&self, store_id: Uuid) -> Result<Option<SubscriptionEntity>>;

    /// Marks the subscription expired and suspends its store in the same write.
    async fn expire_trial(&self, store_id: Uuid) -> Result<()>;

    /// Activates the subscription until `expires`, activates the store and appends the
    /// payment, all in the same write. Returns `None` without writing anything when the
    /// store does not exist.
    async fn activate_after_payment(
        &self,
        store_id: Uuid,
        expires: DateTime<Utc>,
        payment: InsertPaymentEntity,
    ) -> Result<Option<PaymentEntity>>;
}
