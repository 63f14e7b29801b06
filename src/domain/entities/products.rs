use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::enums::product_statuses::ProductStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductEntity {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub description: String,
    pub price_minor: i64,
    pub images: Vec<String>,
    pub quantity: u32,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertProductEntity {
    pub store_id: Uuid,
    pub name: String,
    pub description: String,
    pub price_minor: i64,
    pub images: Vec<String>,
    pub quantity: u32,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductEntity {
    pub name: String,
    pub description: String,
    pub price_minor: i64,
    pub images: Vec<String>,
    pub quantity: u32,
    pub status: ProductStatus,
}
