use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::enums::user_roles::UserRole;

#[derive(Debug, Clone, PartialEq)]
pub struct UserEntity {
    pub id: Uuid,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: UserRole,
    pub store_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A seller account before the data layer has assigned ids. The store id is
/// filled in when the owning store is created in the same write.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterUserEntity {
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}
