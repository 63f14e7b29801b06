use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::{
    application::{
        interfaces::clock::Clock,
        usecases::errors::{UseCaseError, UseCaseResult},
    },
    domain::{
        repositories::subscriptions::SubscriptionRepository,
        value_objects::subscriptions::is_lapsed_trial,
    },
};

/// Applies trial expiry lazily. Every read path calls `expire_lapsed_trials` first, so a
/// store whose trial has ended is already suspended when the read is computed.
pub struct StoreLifecycle<S>
where
    S: SubscriptionRepository + Send + Sync + 'static,
{
    subscription_repo: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> StoreLifecycle<S>
where
    S: SubscriptionRepository + Send + Sync + 'static,
{
    pub fn new(subscription_repo: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            subscription_repo,
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Suspends every store whose trial ended before now and returns the instant the
    /// check used. Safe to call repeatedly.
    pub async fn expire_lapsed_trials(&self) -> UseCaseResult<DateTime<Utc>> {
        let now = self.clock.now();

        let subscriptions = self
            .subscription_repo
            .list_subscriptions()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "lifecycle: failed to list subscriptions");
                UseCaseError::Internal(err)
            })?;

        let mut expired = 0usize;
        for subscription in subscriptions.iter().filter(|sub| is_lapsed_trial(sub, now)) {
            let store_id = subscription.store_id;
            self.subscription_repo
                .expire_trial(store_id)
                .await
                .map_err(|err| {
                    error!(
                        %store_id,
                        db_error = ?err,
                        "lifecycle: failed to expire lapsed trial"
                    );
                    UseCaseError::Internal(err)
                })?;
            info!(%store_id, "lifecycle: trial ended, store suspended");
            expired += 1;
        }

        if expired == 0 {
            debug!("lifecycle: no lapsed trials");
        }

        Ok(now)
    }
}
