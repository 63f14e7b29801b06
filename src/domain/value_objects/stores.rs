use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::stores::{StoreEntity, UpdateStoreDetailsEntity},
    value_objects::enums::{store_statuses::StoreStatus, store_types::StoreType},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreModel {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub logo: String,
    pub store_type: StoreType,
    pub store_type_label: String,
    pub description: String,
    pub phone: String,
    pub status: StoreStatus,
}

impl From<StoreEntity> for StoreModel {
    fn from(entity: StoreEntity) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            logo: entity.logo,
            store_type: entity.store_type,
            store_type_label: entity.store_type.label_ar().to_string(),
            description: entity.description,
            phone: entity.phone,
            status: entity.status,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStoreDetailsModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl UpdateStoreDetailsModel {
    pub fn to_entity(&self) -> UpdateStoreDetailsEntity {
        UpdateStoreDetailsEntity {
            name: self.name.clone(),
            description: self.description.clone(),
            phone: self.phone.clone(),
        }
    }
}
