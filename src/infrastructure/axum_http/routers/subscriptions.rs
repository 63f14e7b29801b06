use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    application::{
        interfaces::{clock::Clock, latency::NetworkLatency},
        usecases::{lifecycle::StoreLifecycle, subscriptions::SubscriptionUseCase},
    },
    auth::AuthUser,
    domain::{
        repositories::{payments::PaymentRepository, subscriptions::SubscriptionRepository},
        value_objects::payments::ProcessPaymentModel,
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        memory::{
            memory_connection::MemoryPoolSquad,
            repositories::{payments::PaymentMemory, subscriptions::SubscriptionMemory},
        },
    },
};

pub fn routes(
    db_pool: Arc<MemoryPoolSquad>,
    clock: Arc<dyn Clock>,
    latency: NetworkLatency,
    annual_fee_minor: i64,
) -> Router {
    let subscriptions_repository = Arc::new(SubscriptionMemory::new(Arc::clone(&db_pool)));
    let payments_repository = PaymentMemory::new(Arc::clone(&db_pool));

    let subscriptions_usecase = SubscriptionUseCase::new(
        Arc::clone(&subscriptions_repository),
        Arc::new(payments_repository),
        StoreLifecycle::new(subscriptions_repository, clock),
        latency,
        annual_fee_minor,
    );

    Router::new()
        .route("/current", get(current_subscription::<SubscriptionMemory, PaymentMemory>))
        .route("/payments", get(list_payments::<SubscriptionMemory, PaymentMemory>))
        .route("/pay", post(pay::<SubscriptionMemory, PaymentMemory>))
        .with_state(Arc::new(subscriptions_usecase))
}

pub async fn current_subscription<Sub, Pay>(
    State(subscriptions_usecase): State<Arc<SubscriptionUseCase<Sub, Pay>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    Sub: SubscriptionRepository + Send + Sync + 'static,
    Pay: PaymentRepository + Send + Sync + 'static,
{
    match subscriptions_usecase.get_subscription(auth.store_id).await {
        Ok(subscription) => (StatusCode::OK, Json(subscription)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn list_payments<Sub, Pay>(
    State(subscriptions_usecase): State<Arc<SubscriptionUseCase<Sub, Pay>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    Sub: SubscriptionRepository + Send + Sync + 'static,
    Pay: PaymentRepository + Send + Sync + 'static,
{
    match subscriptions_usecase.list_payments(auth.store_id).await {
        Ok(payments) => (StatusCode::OK, Json(payments)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn pay<Sub, Pay>(
    State(subscriptions_usecase): State<Arc<SubscriptionUseCase<Sub, Pay>>>,
    auth: AuthUser,
    Json(payment_model): Json<ProcessPaymentModel>,
) -> impl IntoResponse
where
    Sub: SubscriptionRepository + Send + Sync + 'static,
    Pay: PaymentRepository + Send + Sync + 'static,
{
    match subscriptions_usecase
        .process_mock_payment(auth.store_id, payment_model)
        .await
    {
        Ok(payment) => (StatusCode::OK, Json(payment)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
