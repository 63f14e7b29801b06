use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::{
        entities::{
            stores::{InsertStoreEntity, StoreEntity},
            subscriptions::SubscriptionEntity,
            users::{RegisterUserEntity, UserEntity},
        },
        repositories::users::UserRepository,
        value_objects::subscriptions::SubscriptionState,
    },
    infrastructure::memory::memory_connection::MemoryPoolSquad,
};

pub struct UserMemory {
    db_pool: Arc<MemoryPoolSquad>,
}

impl UserMemory {
    pub fn new(db_pool: Arc<MemoryPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UserRepository for UserMemory {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserEntity>> {
        let tables = self.db_pool.read().await;
        Ok(tables.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: String) -> Result<Option<UserEntity>> {
        let tables = self.db_pool.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(&email))
            .cloned())
    }

    async fn register_seller(
        &self,
        user: RegisterUserEntity,
        store: InsertStoreEntity,
        subscription: SubscriptionState,
    ) -> Result<Option<UserEntity>> {
        let mut tables = self.db_pool.write().await;

        if tables
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Ok(None);
        }

        let user_id = Uuid::new_v4();
        let store_id = Uuid::new_v4();

        let user = UserEntity {
            id: user_id,
            email: user.email,
            phone: user.phone,
            password_hash: user.password_hash,
            role: user.role,
            store_id,
            created_at: user.created_at,
        };

        tables.stores.push(StoreEntity {
            id: store_id,
            owner_id: user_id,
            name: store.name,
            logo: store.logo,
            store_type: store.store_type,
            description: store.description,
            phone: store.phone,
            status: store.status,
            created_at: store.created_at,
        });
        tables.subscriptions.push(SubscriptionEntity {
            store_id,
            state: subscription,
        });
        tables.users.push(user.clone());

        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        domain::value_objects::enums::{
            store_statuses::StoreStatus, store_types::StoreType, user_roles::UserRole,
        },
        infrastructure::memory::memory_connection::establish_connection,
    };

    fn seller(email: &str) -> (RegisterUserEntity, InsertStoreEntity) {
        let now = Utc::now();
        (
            RegisterUserEntity {
                email: email.to_string(),
                phone: "0555000000".to_string(),
                password_hash: "hash".to_string(),
                role: UserRole::Seller,
                created_at: now,
            },
            InsertStoreEntity {
                name: "مزرعة".to_string(),
                logo: String::new(),
                store_type: StoreType::Producer,
                description: String::new(),
                phone: "0555000000".to_string(),
                status: StoreStatus::Trial,
                created_at: now,
            },
        )
    }

    #[tokio::test]
    async fn register_seller_links_user_store_and_subscription() {
        let db_pool = Arc::new(establish_connection());
        let repo = UserMemory::new(Arc::clone(&db_pool));
        let (user, store) = seller("new@example.com");
        let trial = SubscriptionState::trial_from(Utc::now());

        let created = repo
            .register_seller(user, store, trial.clone())
            .await
            .unwrap()
            .unwrap();

        let tables = db_pool.read().await;
        let store = tables.stores.iter().find(|s| s.id == created.store_id).unwrap();
        assert_eq!(store.owner_id, created.id);
        let subscription = tables
            .subscriptions
            .iter()
            .find(|s| s.store_id == created.store_id)
            .unwrap();
        assert_eq!(subscription.state, trial);
        drop(tables);

        let found = repo.find_by_email("new@example.com".to_string()).await.unwrap();
        assert_eq!(found, Some(created.clone()));
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn register_seller_rejects_existing_email_without_writing() {
        let db_pool = Arc::new(establish_connection());
        let repo = UserMemory::new(Arc::clone(&db_pool));
        let (user, store) = seller("dup@example.com");
        let trial = SubscriptionState::trial_from(Utc::now());
        repo.register_seller(user, store, trial.clone())
            .await
            .unwrap()
            .unwrap();

        let (user, store) = seller("DUP@example.com");
        let taken = repo.register_seller(user, store, trial).await.unwrap();
        assert!(taken.is_none());

        let tables = db_pool.read().await;
        assert_eq!(tables.users.len(), 1);
        assert_eq!(tables.stores.len(), 1);
        assert_eq!(tables.subscriptions.len(), 1);
    }
}
