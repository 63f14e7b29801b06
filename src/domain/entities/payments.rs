use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::enums::{
    payment_methods::PaymentMethod, payment_statuses::PaymentStatus,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentEntity {
    pub id: Uuid,
    pub store_id: Uuid,
    pub amount_minor: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertPaymentEntity {
    pub store_id: Uuid,
    pub amount_minor: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
}
