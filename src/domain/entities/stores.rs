use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::enums::{store_statuses::StoreStatus, store_types::StoreType};

#[derive(Debug, Clone, PartialEq)]
pub struct StoreEntity {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub logo: String,
    pub store_type: StoreType,
    pub description: String,
    pub phone: String,
    pub status: StoreStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStoreEntity {
    pub name: String,
    pub logo: String,
    pub store_type: StoreType,
    pub description: String,
    pub phone: String,
    pub status: StoreStatus,
    pub created_at: DateTime<Utc>,
}

/// Fields a store owner may change from the settings page. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateStoreDetailsEntity {
    pub name: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
}
