use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    application::{
        interfaces::latency::NetworkLatency,
        usecases::{
            errors::{Resource, UseCaseError, UseCaseResult, ValidationIssue},
            lifecycle::StoreLifecycle,
        },
    },
    domain::{
        entities::{products::ProductEntity, stores::StoreEntity},
        repositories::{
            products::ProductRepository, stores::StoreRepository,
            subscriptions::SubscriptionRepository,
        },
        value_objects::{
            dashboard::{DashboardOverviewModel, RECENT_PRODUCTS_LIMIT},
            products::{ProductFormModel, ProductModel},
            stores::{StoreModel, UpdateStoreDetailsModel},
            subscriptions::SubscriptionModel,
        },
    },
};

/// Owner-scoped reads and writes. Nothing here applies the public visibility filter.
pub struct DashboardUseCase<S, P, Sub>
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    store_repo: Arc<S>,
    product_repo: Arc<P>,
    subscription_repo: Arc<Sub>,
    lifecycle: StoreLifecycle<Sub>,
    latency: NetworkLatency,
}

impl<S, P, Sub> DashboardUseCase<S, P, Sub>
where
    S: StoreRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
{
    pub fn new(
        store_repo: Arc<S>,
        product_repo: Arc<P>,
        subscription_repo: Arc<Sub>,
        lifecycle: StoreLifecycle<Sub>,
        latency: NetworkLatency,
    ) -> Self {
        Self {
            store_repo,
            product_repo,
            subscription_repo,
            lifecycle,
            latency,
        }
    }

    pub async fn store_for_user(&self, user_id: Uuid) -> UseCaseResult<StoreModel> {
        self.latency.pause().await;
        self.lifecycle.expire_lapsed_trials().await?;

        self.store_repo
            .find_by_owner(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "dashboard: failed to load owner store");
                UseCaseError::Internal(err)
            })?
            .map(StoreModel::from)
            .ok_or(UseCaseError::NotFound(Resource::Store))
    }

    pub async fn products_for_store(&self, store_id: Uuid) -> UseCaseResult<Vec<ProductModel>> {
        self.latency.pause().await;
        self.lifecycle.expire_lapsed_trials().await?;

        let products = self.list_store_products(store_id).await?;
        Ok(products.into_iter().map(ProductModel::from).collect())
    }

    pub async fn overview(&self, store_id: Uuid) -> UseCaseResult<DashboardOverviewModel> {
        self.latency.pause().await;
        let now = self.lifecycle.expire_lapsed_trials().await?;

        let store = self
            .find_store(store_id)
            .await?
            .ok_or(UseCaseError::NotFound(Resource::Store))?;
        let products = self.list_store_products(store_id).await?;

        let subscription = self
            .subscription_repo
            .find_by_store_id(store_id)
            .await
            .map_err(|err| {
                error!(%store_id, db_error = ?err, "dashboard: failed to load subscription");
                UseCaseError::Internal(err)
            })?
            .map(|entity| SubscriptionModel::from_entity(entity, now));

        let product_count = products.len();
        let recent_products = products
            .into_iter()
            .rev()
            .take(RECENT_PRODUCTS_LIMIT)
            .map(ProductModel::from)
            .collect();

        Ok(DashboardOverviewModel {
            store: StoreModel::from(store),
            product_count,
            subscription,
            recent_products,
        })
    }

    pub async fn add_product(
        &self,
        store_id: Uuid,
        product_form: ProductFormModel,
    ) -> UseCaseResult<ProductModel> {
        self.latency.pause().await;
        validate_product(&product_form).inspect_err(|issue| {
            warn!(%store_id, issue = %issue, "dashboard: product rejected");
        })?;

        if self.find_store(store_id).await?.is_none() {
            return Err(UseCaseError::NotFound(Resource::Store));
        }

        let product = self
            .product_repo
            .insert(product_form.to_insert_entity(store_id, self.lifecycle.now()))
            .await
            .map_err(|err| {
                error!(%store_id, db_error = ?err, "dashboard: failed to insert product");
                UseCaseError::Internal(err)
            })?;

        info!(%store_id, product_id = %product.id, "dashboard: product added");
        Ok(ProductModel::from(product))
    }

    pub async fn update_product(
        &self,
        store_id: Uuid,
        product_id: Uuid,
        product_form: ProductFormModel,
    ) -> UseCaseResult<ProductModel> {
        self.latency.pause().await;
        validate_product(&product_form).inspect_err(|issue| {
            warn!(%store_id, %product_id, issue = %issue, "dashboard: product update rejected");
        })?;

        let product = self
            .product_repo
            .update(store_id, product_id, product_form.to_update_entity())
            .await
            .map_err(|err| {
                error!(%store_id, %product_id, db_error = ?err, "dashboard: failed to update product");
                UseCaseError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%store_id, %product_id, "dashboard: product not in store");
                UseCaseError::NotFound(Resource::Product)
            })?;

        info!(%store_id, %product_id, "dashboard: product updated");
        Ok(ProductModel::from(product))
    }

    pub async fn delete_product(&self, store_id: Uuid, product_id: Uuid) -> UseCaseResult<()> {
        self.latency.pause().await;

        let deleted = self
            .product_repo
            .delete(store_id, product_id)
            .await
            .map_err(|err| {
                error!(%store_id, %product_id, db_error = ?err, "dashboard: failed to delete product");
                UseCaseError::Internal(err)
            })?;
        if !deleted {
            warn!(%store_id, %product_id, "dashboard: product not in store");
            return Err(UseCaseError::NotFound(Resource::Product));
        }

        info!(%store_id, %product_id, "dashboard: product deleted");
        Ok(())
    }

    pub async fn update_store_details(
        &self,
        store_id: Uuid,
        details: UpdateStoreDetailsModel,
    ) -> UseCaseResult<StoreModel> {
        self.latency.pause().await;
        self.lifecycle.expire_lapsed_trials().await?;

        if details.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            warn!(%store_id, "dashboard: blank store name rejected");
            return Err(ValidationIssue::MissingStoreName.into());
        }

        let store = self
            .store_repo
            .update_details(store_id, details.to_entity())
            .await
            .map_err(|err| {
                error!(%store_id, db_error = ?err, "dashboard: failed to update store details");
                UseCaseError::Internal(err)
            })?
            .ok_or(UseCaseError::NotFound(Resource::Store))?;

        info!(%store_id, "dashboard: store details updated");
        Ok(StoreModel::from(store))
    }

    async fn find_store(&self, store_id: Uuid) -> UseCaseResult<Option<StoreEntity>> {
        self.store_repo.find_by_id(store_id).await.map_err(|err| {
            error!(%store_id, db_error = ?err, "dashboard: failed to load store");
            UseCaseError::Internal(err)
        })
    }

    async fn list_store_products(
        &self,
        store_id: Uuid,
    ) -> UseCaseResult<Vec<ProductEntity>> {
        self.product_repo.list_by_store(store_id).await.map_err(|err| {
            error!(%store_id, db_error = ?err, "dashboard: failed to list products");
            UseCaseError::Internal(err)
        })
    }
}

fn validate_product(product_form: &ProductFormModel) -> Result<(), ValidationIssue> {
    if product_form.name.trim().is_empty() {
        return Err(ValidationIssue::MissingProductName);
    }
    if product_form.price_minor < 0 {
        return Err(ValidationIssue::NegativePrice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::predicate::{always, eq};

    use super::*;
    use crate::{
        application::interfaces::clock::ManualClock,
        domain::{
            repositories::{
                products::MockProductRepository, stores::MockStoreRepository,
                subscriptions::MockSubscriptionRepository,
            },
            value_objects::enums::{
                product_statuses::ProductStatus, subscription_statuses::SubscriptionStatus,
            },
        },
        infrastructure::memory::{
            memory_connection::{MemoryPoolSquad, establish_seeded_connection},
            repositories::{
                products::ProductMemory, stores::StoreMemory, subscriptions::SubscriptionMemory,
            },
        },
    };

    type MemoryDashboard = DashboardUseCase<StoreMemory, ProductMemory, SubscriptionMemory>;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 20, 10, 0, 0).unwrap()
    }

    fn memory_dashboard(db_pool: &Arc<MemoryPoolSquad>) -> MemoryDashboard {
        let subscription_repo = Arc::new(SubscriptionMemory::new(Arc::clone(db_pool)));
        DashboardUseCase::new(
            Arc::new(StoreMemory::new(Arc::clone(db_pool))),
            Arc::new(ProductMemory::new(Arc::clone(db_pool))),
            Arc::clone(&subscription_repo),
            StoreLifecycle::new(subscription_repo, Arc::new(ManualClock::new(t0()))),
            NetworkLatency::none(),
        )
    }

    async fn first_store(db_pool: &MemoryPoolSquad) -> Uuid {
        db_pool.read().await.stores[0].id
    }

    fn form(name: &str, price_minor: i64, quantity: u32) -> ProductFormModel {
        ProductFormModel {
            name: name.to_string(),
            description: String::new(),
            price_minor,
            images: vec![],
            quantity,
            status: None,
        }
    }

    #[tokio::test]
    async fn overview_lists_newest_products_first() {
        let db_pool = Arc::new(establish_seeded_connection(t0(), "fellah123").unwrap());
        let store_id = first_store(&db_pool).await;
        let dashboard = memory_dashboard(&db_pool);

        for i in 0..5 {
            dashboard
                .add_product(store_id, form(&format!("منتج {i}"), 1_000, 30))
                .await
                .unwrap();
        }

        let overview = dashboard.overview(store_id).await.unwrap();
        assert_eq!(overview.product_count, 7);
        assert_eq!(overview.recent_products.len(), RECENT_PRODUCTS_LIMIT);
        assert_eq!(overview.recent_products[0].name, "منتج 4");
        assert_eq!(overview.recent_products[4].name, "منتج 0");
        assert_eq!(
            overview.subscription.map(|s| s.status()),
            Some(SubscriptionStatus::Active)
        );
    }

    #[tokio::test]
    async fn update_of_unknown_product_is_not_found_and_changes_nothing() {
        let db_pool = Arc::new(establish_seeded_connection(t0(), "fellah123").unwrap());
        let store_id = first_store(&db_pool).await;
        let dashboard = memory_dashboard(&db_pool);
        let before = db_pool.read().await.products.clone();

        let err = dashboard
            .update_product(store_id, Uuid::new_v4(), form("بصل", 5_000, 10))
            .await
            .unwrap_err();

        assert!(matches!(err, UseCaseError::NotFound(Resource::Product)));
        assert_eq!(db_pool.read().await.products, before);
    }

    #[tokio::test]
    async fn product_of_another_store_cannot_be_deleted() {
        let db_pool = Arc::new(establish_seeded_connection(t0(), "fellah123").unwrap());
        let dashboard = memory_dashboard(&db_pool);
        let (own_store, foreign_product) = {
            let tables = db_pool.read().await;
            let own_store = tables.stores[0].id;
            let foreign = tables
                .products
                .iter()
                .find(|p| p.store_id != own_store)
                .unwrap()
                .id;
            (own_store, foreign)
        };

        let err = dashboard
            .delete_product(own_store, foreign_product)
            .await
            .unwrap_err();

        assert!(matches!(err, UseCaseError::NotFound(Resource::Product)));
        assert!(db_pool.read().await.products.iter().any(|p| p.id == foreign_product));
    }

    #[tokio::test]
    async fn added_product_derives_stock_status() {
        let db_pool = Arc::new(establish_seeded_connection(t0(), "fellah123").unwrap());
        let store_id = first_store(&db_pool).await;
        let dashboard = memory_dashboard(&db_pool);

        let product = dashboard
            .add_product(store_id, form("فلفل", 9_000, 0))
            .await
            .unwrap();

        assert_eq!(product.status, ProductStatus::OutOfStock);
        let listed = dashboard.products_for_store(store_id).await.unwrap();
        assert!(listed.contains(&product));
    }

    #[tokio::test]
    async fn add_product_validates_before_touching_storage() {
        let mut product_repo = MockProductRepository::new();
        product_repo.expect_insert().never();
        let mut store_repo = MockStoreRepository::new();
        store_repo.expect_find_by_id().never();
        let subscription_repo = Arc::new(MockSubscriptionRepository::new());

        let dashboard = DashboardUseCase::new(
            Arc::new(store_repo),
            Arc::new(product_repo),
            Arc::clone(&subscription_repo),
            StoreLifecycle::new(subscription_repo, Arc::new(ManualClock::new(t0()))),
            NetworkLatency::none(),
        );
        let store_id = Uuid::new_v4();

        let err = dashboard
            .add_product(store_id, form("  ", 1_000, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UseCaseError::Validation(ValidationIssue::MissingProductName)
        ));

        let err = dashboard
            .add_product(store_id, form("عسل", -1, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UseCaseError::Validation(ValidationIssue::NegativePrice)
        ));
    }

    #[tokio::test]
    async fn update_store_details_on_unknown_store() {
        let store_id = Uuid::new_v4();
        let mut store_repo = MockStoreRepository::new();
        store_repo
            .expect_update_details()
            .with(eq(store_id), always())
            .returning(|_, _| Ok(None));
        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo
            .expect_list_subscriptions()
            .returning(|| Ok(vec![]));
        let subscription_repo = Arc::new(subscription_repo);

        let dashboard = DashboardUseCase::new(
            Arc::new(store_repo),
            Arc::new(MockProductRepository::new()),
            Arc::clone(&subscription_repo),
            StoreLifecycle::new(subscription_repo, Arc::new(ManualClock::new(t0()))),
            NetworkLatency::none(),
        );

        let err = dashboard
            .update_store_details(
                store_id,
                UpdateStoreDetailsModel {
                    phone: Some("0550000000".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, UseCaseError::NotFound(Resource::Store)));
    }
}
