use anyhow::Result;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    auth::password,
    domain::entities::{
        payments::PaymentEntity, products::ProductEntity, stores::StoreEntity,
        subscriptions::SubscriptionEntity, users::UserEntity,
    },
    infrastructure::memory::seed,
};

/// Every record set of the marketplace. Rows keep insertion order, which is the order
/// listings are returned in.
#[derive(Debug, Default)]
pub struct MarketTables {
    pub users: Vec<UserEntity>,
    pub stores: Vec<StoreEntity>,
    pub products: Vec<ProductEntity>,
    pub subscriptions: Vec<SubscriptionEntity>,
    pub payments: Vec<PaymentEntity>,
}

/// One lock guards all tables, so a repository call that touches several of them
/// (registration, trial expiry, payment) is atomic.
pub type MemoryPoolSquad = RwLock<MarketTables>;

pub fn establish_connection() -> MemoryPoolSquad {
    RwLock::new(MarketTables::default())
}

/// An in-memory database pre-filled with the demo marketplace. Every demo seller
/// logs in with `demo_password`.
pub fn establish_seeded_connection(
    now: DateTime<Utc>,
    demo_password: &str,
) -> Result<MemoryPoolSquad> {
    let password_hash = password::hash_password(demo_password)?;
    let mut tables = MarketTables::default();
    seed::seed_demo_market(&mut tables, now, &password_hash);
    Ok(RwLock::new(tables))
}
