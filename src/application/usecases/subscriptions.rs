use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    application::{
        interfaces::latency::NetworkLatency,
        usecases::{
            errors::{Resource, UseCaseError, UseCaseResult},
            lifecycle::StoreLifecycle,
        },
    },
    domain::{
        entities::payments::InsertPaymentEntity,
        repositories::{payments::PaymentRepository, subscriptions::SubscriptionRepository},
        value_objects::{
            enums::payment_statuses::PaymentStatus,
            payments::{PaymentModel, ProcessPaymentModel},
            subscriptions::{SubscriptionModel, paid_period_end},
        },
    },
};

pub struct SubscriptionUseCase<Sub, Pay>
where
    Sub: SubscriptionRepository + Send + Sync + 'static,
    Pay: PaymentRepository + Send + Sync + 'static,
{
    subscription_repo: Arc<Sub>,
    payment_repo: Arc<Pay>,
    lifecycle: StoreLifecycle<Sub>,
    latency: NetworkLatency,
    annual_fee_minor: i64,
}

impl<Sub, Pay> SubscriptionUseCase<Sub, Pay>
where
    Sub: SubscriptionRepository + Send + Sync + 'static,
    Pay: PaymentRepository + Send + Sync + 'static,
{
    pub fn new(
        subscription_repo: Arc<Sub>,
        payment_repo: Arc<Pay>,
        lifecycle: StoreLifecycle<Sub>,
        latency: NetworkLatency,
        annual_fee_minor: i64,
    ) -> Self {
        Self {
            subscription_repo,
            payment_repo,
            lifecycle,
            latency,
            annual_fee_minor,
        }
    }

    pub async fn get_subscription(&self, store_id: Uuid) -> UseCaseResult<SubscriptionModel> {
        self.latency.pause().await;
        let now = self.lifecycle.expire_lapsed_trials().await?;

        self.subscription_repo
            .find_by_store_id(store_id)
            .await
            .map_err(|err| {
                error!(%store_id, db_error = ?err, "subscription: failed to load subscription");
                UseCaseError::Internal(err)
            })?
            .map(|entity| SubscriptionModel::from_entity(entity, now))
            .ok_or(UseCaseError::NotFound(Resource::Subscription))
    }

    pub async fn list_payments(&self, store_id: Uuid) -> UseCaseResult<Vec<PaymentModel>> {
        self.latency.pause().await;

        let payments = self
            .payment_repo
            .list_by_store(store_id)
            .await
            .map_err(|err| {
                error!(%store_id, db_error = ?err, "subscription: failed to list payments");
                UseCaseError::Internal(err)
            })?;

        Ok(payments.into_iter().map(PaymentModel::from).collect())
    }

    /// Settles the annual fee: the subscription becomes active for a year from now, the
    /// store becomes active, and a completed payment is recorded.
    pub async fn process_mock_payment(
        &self,
        store_id: Uuid,
        payment_model: ProcessPaymentModel,
    ) -> UseCaseResult<PaymentModel> {
        self.latency.pause_for_payment().await;

        let now = self.lifecycle.now();
        let expires = paid_period_end(now);
        info!(
            %store_id,
            method = %payment_model.method,
            amount_minor = self.annual_fee_minor,
            "subscription: processing payment"
        );

        let payment = self
            .subscription_repo
            .activate_after_payment(
                store_id,
                expires,
                InsertPaymentEntity {
                    store_id,
                    amount_minor: self.annual_fee_minor,
                    method: payment_model.method,
                    status: PaymentStatus::Completed,
                    paid_at: now,
                },
            )
            .await
            .map_err(|err| {
                error!(%store_id, db_error = ?err, "subscription: failed to record payment");
                UseCaseError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%store_id, "subscription: payment for unknown store");
                UseCaseError::NotFound(Resource::Store)
            })?;

        info!(%store_id, payment_id = %payment.id, %expires, "subscription: store activated");
        Ok(PaymentModel::from(payment))
    }
}
