use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::payments::PaymentEntity,
    value_objects::enums::{payment_methods::PaymentMethod, payment_statuses::PaymentStatus},
};

/// Annual subscription fee in centimes (5 000 DZD) unless configured otherwise.
pub const DEFAULT_ANNUAL_FEE_MINOR: i64 = 500_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentModel {
    pub id: Uuid,
    pub store_id: Uuid,
    pub amount_minor: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
}

impl From<PaymentEntity> for PaymentModel {
    fn from(entity: PaymentEntity) -> Self {
        Self {
            id: entity.id,
            store_id: entity.store_id,
            amount_minor: entity.amount_minor,
            method: entity.method,
            status: entity.status,
            paid_at: entity.paid_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPaymentModel {
    pub method: PaymentMethod,
}
