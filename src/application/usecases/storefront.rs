use std::{collections::HashSet, sync::Arc};

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
        entities::stores::StoreEntity,
        repositories::{
            products::ProductRepository, stores::StoreRepository,
            subscriptions::SubscriptionRepository,
        },
        value_objects::{
            products::ProductModel,
            stores::StoreModel,
            storefront::{ListingFilter, matches_text},
        },
    },
};

/// Public, unauthenticated reads. Only trial and active stores and their products are
/// ever returned, except by `list_products_by_store`.
pub struct StorefrontUseCase<S, P, Sub>
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    store_repo: Arc<S>,
    product_repo: Arc<P>,
    lifecycle: StoreLifecycle<Sub>,
    latency: NetworkLatency,
}

impl<S, P, Sub> StorefrontUseCase<S, P, Sub>
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    pub fn new(
        store_repo: Arc<S>,
        product_repo: Arc<P>,
        lifecycle: StoreLifecycle<Sub>,
        latency: NetworkLatency,
    ) -> Self {
        Self {
            store_repo,
            product_repo,
            lifecycle,
            latency,
        }
    }

    pub async fn list_stores(&self, filter: ListingFilter) -> UseCaseResult<Vec<StoreModel>> {
        self.latency.pause().await;
        self.lifecycle.expire_lapsed_trials().await?;

        let term = filter.search_term();
        let stores = self
            .visible_stores()
            .await?
            .into_iter()
            .filter(|store| filter.matches_type(store.store_type))
            .filter(|store| matches_text(term.as_deref(), &store.name, &store.description))
            .map(StoreModel::from)
            .collect::<Vec<_>>();

        info!(count = stores.len(), "storefront: listed stores");
        Ok(stores)
    }

    pub async fn list_products(&self, filter: ListingFilter) -> UseCaseResult<Vec<ProductModel>> {
        self.latency.pause().await;
        self.lifecycle.expire_lapsed_trials().await?;

        let store_ids = self
            .visible_stores()
            .await?
            .into_iter()
            .filter(|store| filter.matches_type(store.store_type))
            .map(|store| store.id)
            .collect::<HashSet<_>>();

        let products = self.product_repo.list_products().await.map_err(|err| {
            error!(db_error = ?err, "storefront: failed to list products");
            UseCaseError::Internal(err)
        })?;

        let term = filter.search_term();
        let products = products
            .into_iter()
            .filter(|product| store_ids.contains(&product.store_id))
            .filter(|product| {
                matches_text(term.as_deref(), &product.name, &product.description)
            })
            .map(ProductModel::from)
            .collect::<Vec<_>>();

        info!(count = products.len(), "storefront: listed products");
        Ok(products)
    }

    pub async fn get_store(&self, store_id: Uuid) -> UseCaseResult<StoreModel> {
        self.latency.pause().await;
        self.lifecycle.expire_lapsed_trials().await?;

        match self.find_store(store_id).await? {
            Some(store) if store.status.is_publicly_visible() => Ok(StoreModel::from(store)),
            Some(store) => {
                warn!(%store_id, status = %store.status, "storefront: store is hidden");
                Err(UseCaseError::NotFound(Resource::Store))
            }
            None => Err(UseCaseError::NotFound(Resource::Store)),
        }
    }

    pub async fn get_product(&self, product_id: Uuid) -> UseCaseResult<ProductModel> {
        self.latency.pause().await;
        self.lifecycle.expire_lapsed_trials().await?;

        let product = self
            .product_repo
            .find_by_id(product_id)
            .await
            .map_err(|err| {
                error!(%product_id, db_error = ?err, "storefront: failed to load product");
                UseCaseError::Internal(err)
            })?
            .ok_or(UseCaseError::NotFound(Resource::Product))?;

        let visible = self
            .find_store(product.store_id)
            .await?
            .is_some_and(|store| store.status.is_publicly_visible());
        if !visible {
            warn!(%product_id, store_id = %product.store_id, "storefront: product store is hidden");
            return Err(UseCaseError::NotFound(Resource::Product));
        }

        Ok(ProductModel::from(product))
    }

    /// Every product of one store, whatever the store's status.
    pub async fn list_products_by_store(&self, store_id: Uuid) -> UseCaseResult<Vec<ProductModel>> {
        self.latency.pause().await;
        self.lifecycle.expire_lapsed_trials().await?;

        let products = self
            .product_repo
            .list_by_store(store_id)
            .await
            .map_err(|err| {
                error!(%store_id, db_error = ?err, "storefront: failed to list store products");
                UseCaseError::Internal(err)
            })?;

        Ok(products.into_iter().map(ProductModel::from).collect())
    }

    async fn visible_stores(&self) -> UseCaseResult<Vec<StoreEntity>> {
        let stores = self.store_repo.list_stores().await.map_err(|err| {
            error!(db_error = ?err, "storefront: failed to list stores");
            UseCaseError::Internal(err)
        })?;

        Ok(stores
            .into_iter()
            .filter(|store| store.status.is_publicly_visible())
            .collect())
    }

    async fn find_store(&self, store_id: Uuid) -> UseCaseResult<Option<StoreEntity>> {
        self.store_repo.find_by_id(store_id).await.map_err(|err| {
            error!(%store_id, db_error = ?err, "storefront: failed to load store");
            UseCaseError::Internal(err)
        })
    }
}
