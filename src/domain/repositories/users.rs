use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::{
        stores::InsertStoreEntity,
        users::{RegisterUserEntity, UserEntity},
    },
    value_objects::subscriptions::SubscriptionState,
};

#[automock]
#[async_trait]
pub trait UserRepository {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserEntity>>;

    /// `email` must already be normalized (trimmed, lowercase).
    async fn find_by_email(&self, email: String) -> Result<Option<UserEntity>>;

    /// Creates the user, its store and the store's subscription in one write. Returns
    /// `None` without writing anything when the email is already registered.
    async fn register_seller(
        &self,
        user: RegisterUserEntity,
        store: InsertStoreEntity,
        subscription: SubscriptionState,
    ) -> Result<Option<UserEntity>>;
}
