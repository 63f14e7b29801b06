use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use crate::{
    application::{
        interfaces::{clock::Clock, latency::NetworkLatency},
        usecases::{errors::Resource, lifecycle::StoreLifecycle, storefront::StorefrontUseCase},
    },
    domain::{
        repositories::{
            products::ProductRepository, stores::StoreRepository,
            subscriptions::SubscriptionRepository,
        },
        value_objects::{products::ProductModel, storefront::ListingFilter},
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
    let subscription_repository = SubscriptionMemory::new(Arc::clone(&db_pool));

    let storefront_usecase = StorefrontUseCase::new(
        Arc::new(store_repository),
        Arc::new(product_repository),
        StoreLifecycle::new(Arc::new(subscription_repository), clock),
        latency,
    );

    Router::new()
        .route(
            "/stores",
            get(list_stores::<StoreMemory, ProductMemory, SubscriptionMemory>),
        )
        .route(
            "/stores/:store_id",
            get(get_store::<StoreMemory, ProductMemory, SubscriptionMemory>),
        )
        .route(
            "/stores/:store_id/products",
            get(list_products_by_store::<StoreMemory, ProductMemory, SubscriptionMemory>),
        )
        .route(
            "/products",
            get(list_products::<StoreMemory, ProductMemory, SubscriptionMemory>),
        )
        .route(
            "/products/:product_id",
            get(get_product::<StoreMemory, ProductMemory, SubscriptionMemory>),
        )
        .with_state(Arc::new(storefront_usecase))
}

pub async fn list_stores<S, P, Sub>(
    State(storefront_usecase): State<Arc<StorefrontUseCase<S, P, Sub>>>,
    Query(filter): Query<ListingFilter>,
) -> impl IntoResponse
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    match storefront_usecase.list_stores(filter).await {
        Ok(stores) => (StatusCode::OK, Json(stores)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn get_store<S, P, Sub>(
    State(storefront_usecase): State<Arc<StorefrontUseCase<S, P, Sub>>>,
    Path(store_id): Path<String>,
) -> impl IntoResponse
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    let store_id = match parse_id(&store_id, Resource::Store) {
        Ok(store_id) => store_id,
        Err(err) => return err.into_response(),
    };

    match storefront_usecase.get_store(store_id).await {
        Ok(store) => (StatusCode::OK, Json(store)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn list_products_by_store<S, P, Sub>(
    State(storefront_usecase): State<Arc<StorefrontUseCase<S, P, Sub>>>,
    Path(store_id): Path<String>,
) -> impl IntoResponse
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    // Same answer as for an unknown store.
    let Ok(store_id) = parse_id(&store_id, Resource::Store) else {
        return (StatusCode::OK, Json(Vec::<ProductModel>::new())).into_response();
    };

    match storefront_usecase.list_products_by_store(store_id).await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn list_products<S, P, Sub>(
    State(storefront_usecase): State<Arc<StorefrontUseCase<S, P, Sub>>>,
    Query(filter): Query<ListingFilter>,
) -> impl IntoResponse
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    match storefront_usecase.list_products(filter).await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn get_product<S, P, Sub>(
    State(storefront_usecase): State<Arc<StorefrontUseCase<S, P, Sub>>>,
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

    match storefront_usecase.get_product(product_id).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
