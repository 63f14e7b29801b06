use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::products::{InsertProductEntity, ProductEntity, UpdateProductEntity},
    value_objects::enums::product_statuses::ProductStatus,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductModel {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub description: String,
    pub price_minor: i64,
    pub images: Vec<String>,
    pub quantity: u32,
    pub status: ProductStatus,
    pub status_label: String,
}

impl From<ProductEntity> for ProductModel {
    fn from(entity: ProductEntity) -> Self {
        Self {
            id: entity.id,
            store_id: entity.store_id,
            name: entity.name,
            description: entity.description,
            price_minor: entity.price_minor,
            images: entity.images,
            quantity: entity.quantity,
            status_label: entity.status.label_ar().to_string(),
            status: entity.status,
        }
    }
}

/// Product form submitted from the dashboard. A missing status is derived from quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFormModel {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_minor: i64,
    #[serde(default)]
    pub images: Vec<String>,
    pub quantity: u32,
    #[serde(default)]
    pub status: Option<ProductStatus>,
}

impl ProductFormModel {
    fn resolved_status(&self) -> ProductStatus {
        self.status
            .unwrap_or_else(|| ProductStatus::from_quantity(self.quantity))
    }

    pub fn to_insert_entity(&self, store_id: Uuid, now: DateTime<Utc>) -> InsertProductEntity {
        InsertProductEntity {
            store_id,
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            price_minor: self.price_minor,
            images: self.images.clone(),
            quantity: self.quantity,
            status: self.resolved_status(),
            created_at: now,
        }
    }

    pub fn to_update_entity(&self) -> UpdateProductEntity {
        UpdateProductEntity {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            price_minor: self.price_minor,
            images: self.images.clone(),
            quantity: self.quantity,
            status: self.resolved_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(quantity: u32, status: Option<ProductStatus>) -> ProductFormModel {
        ProductFormModel {
            name: " طماطم ".to_string(),
            description: String::new(),
            price_minor: 12_000,
            images: vec![],
            quantity,
            status,
        }
    }

    #[test]
    fn explicit_status_wins_over_quantity() {
        let entity = form(0, Some(ProductStatus::InStock)).to_update_entity();
        assert_eq!(entity.status, ProductStatus::InStock);
        assert_eq!(entity.quantity, 0);
    }

    #[test]
    fn model_carries_arabic_status_label() {
        let entity = form(0, None).to_insert_entity(Uuid::nil(), Utc::now());
        let model = ProductModel::from(ProductEntity {
            id: Uuid::new_v4(),
            store_id: entity.store_id,
            name: entity.name,
            description: entity.description,
            price_minor: entity.price_minor,
            images: entity.images,
            quantity: entity.quantity,
            status: entity.status,
            created_at: entity.created_at,
        });

        assert_eq!(model.status, ProductStatus::OutOfStock);
        assert_eq!(model.status_label, "نفذت الكمية");
    }

    #[test]
    fn missing_status_is_derived_and_name_trimmed() {
        let entity = form(3, None).to_insert_entity(Uuid::nil(), Utc::now());
        assert_eq!(entity.status, ProductStatus::LowStock);
        assert_eq!(entity.name, "طماطم");
    }
}
