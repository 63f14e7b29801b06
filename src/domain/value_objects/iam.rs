use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::users::{RegisterUserEntity, UserEntity},
    value_objects::enums::{store_types::StoreType, user_roles::UserRole},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserModel {
    pub id: Uuid,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub store_id: Uuid,
}

impl From<UserEntity> for UserModel {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            phone: entity.phone,
            role: entity.role,
            store_id: entity.store_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginModel {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSellerModel {
    pub store_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(default)]
    pub store_type: Option<StoreType>,
}

impl RegisterSellerModel {
    pub fn to_entity(&self, password_hash: String, now: DateTime<Utc>) -> RegisterUserEntity {
        RegisterUserEntity {
            email: normalize_email(&self.email),
            phone: self.phone.trim().to_string(),
            password_hash,
            role: UserRole::Seller,
            created_at: now,
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
