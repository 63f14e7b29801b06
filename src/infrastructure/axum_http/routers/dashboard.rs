use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use crate::{
    application::{
        interfaces::{clock::Clock, latency::NetworkLatency},
        usecases::{dashboard::DashboardUseCase, errors::Resource, lifecycle::StoreLifecycle},
    },
    auth::AuthUser,
    domain::{
        repositories::{
            products::ProductRepository, stores::StoreRepository,
            subscriptions::SubscriptionRepository,
        },
        value_objects::{products::ProductFormModel, stores::UpdateStoreDetailsModel},
    },
    infrastructure::{
        axum_http::{error_responses::AppError, routers::parse_id},
        memory::{
            memory_connection::MemoryPoolSquad,
            repositories::{
                products::ProductMemory, stores::StoreMemory, subscriptions::SubscriptionMemory,
            },
        },
    },
};

pub fn routes(
    db_pool: Arc<MemoryPoolSquad>,
    clock: Arc<dyn Clock>,
    latency: NetworkLatency,
) -> Router {
    let store_repository = StoreMemory::new(Arc::clone(&db_pool));
    let product_repository = ProductMemory::new(Arc::clone(&db_pool));
    let subscription_repository = Arc::new(SubscriptionMemory::new(Arc::clone(&db_pool)));

    let dashboard_usecase = DashboardUseCase::new(
        Arc::new(store_repository),
        Arc::new(product_repository),
        Arc::clone(&subscription_repository),
        StoreLifecycle::new(subscription_repository, clock),
        latency,
    );

    Router::new()
        .route(
            "/overview",
            get(overview::<StoreMemory, ProductMemory, SubscriptionMemory>),
        )
        .route(
            "/store",
            get(own_store::<StoreMemory, ProductMemory, SubscriptionMemory>)
                .patch(update_store_details::<StoreMemory, ProductMemory, SubscriptionMemory>),
        )
        .route(
            "/products",
            get(list_products::<StoreMemory, ProductMemory, SubscriptionMemory>)
                .post(add_product::<StoreMemory, ProductMemory, SubscriptionMemory>),
        )
        .route(
            "/products/:product_id",
            put(update_product::<StoreMemory, ProductMemory, SubscriptionMemory>)
                .delete(delete_product::<StoreMemory, ProductMemory, SubscriptionMemory>),
        )
        .with_state(Arc::new(dashboard_usecase))
}

pub async fn overview<S, P, Sub>(
    State(dashboard_usecase): State<Arc<DashboardUseCase<S, P, Sub>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    match dashboard_usecase.overview(auth.store_id).await {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn own_store<S, P, Sub>(
    State(dashboard_usecase): State<Arc<DashboardUseCase<S, P, Sub>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    match dashboard_usecase.store_for_user(auth.user_id).await {
        Ok(store) => (StatusCode::OK, Json(store)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn update_store_details<S, P, Sub>(
    State(dashboard_usecase): State<Arc<DashboardUseCase<S, P, Sub>>>,
    auth: AuthUser,
    Json(details): Json<UpdateStoreDetailsModel>,
) -> impl IntoResponse
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    match dashboard_usecase
        .update_store_details(auth.store_id, details)
        .await
    {
        Ok(store) => (StatusCode::OK, Json(store)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn list_products<S, P, Sub>(
    State(dashboard_usecase): State<Arc<DashboardUseCase<S, P, Sub>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    match dashboard_usecase.products_for_store(auth.store_id).await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn add_product<S, P, Sub>(
    State(dashboard_usecase): State<Arc<DashboardUseCase<S, P, Sub>>>,
    auth: AuthUser,
    Json(product_form): Json<ProductFormModel>,
) -> impl IntoResponse
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    match dashboard_usecase.add_product(auth.store_id, product_form).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn update_product<S, P, Sub>(
    State(dashboard_usecase): State<Arc<DashboardUseCase<S, P, Sub>>>,
    auth: AuthUser,
    Path(product_id): Path<String>,
    Json(product_form): Json<ProductFormModel>,
) -> impl IntoResponse
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    let product_id = match parse_id(&product_id, Resource::Product) {
        Ok(product_id) => product_id,
        Err(err) => return err.into_response(),
    };

    match dashboard_usecase
        .update_product(auth.store_id, product_id, product_form)
        .await
    {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn delete_product<S, P, Sub>(
    State(dashboard_usecase): State<Arc<DashboardUseCase<S, P, Sub>>>,
    auth: AuthUser,
    Path(product_id): Path<String>,
) -> impl IntoResponse
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    let product_id = match parse_id(&product_id, Resource::Product) {
        Ok(product_id) => product_id,
        Err(err) => return err.into_response(),
    };

    match dashboard_usecase.delete_product(auth.store_id, product_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
