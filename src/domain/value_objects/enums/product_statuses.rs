use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Quantities below this are flagged as low stock when no status is given.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl ProductStatus {
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => ProductStatus::OutOfStock,
            q if q < LOW_STOCK_THRESHOLD => ProductStatus::LowStock,
            _ => ProductStatus::InStock,
        }
    }

    pub fn label_ar(&self) -> &'static str {
        match self {
            ProductStatus::InStock => "متوفر",
            ProductStatus::LowStock => "كمية محدودة",
            ProductStatus::OutOfStock => "نفذت الكمية",
        }
    }
}

impl Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            ProductStatus::InStock => "in_stock",
            ProductStatus::LowStock => "low_stock",
            ProductStatus::OutOfStock => "out_of_stock",
        };
        write!(f, "{}", status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_status_from_quantity() {
        assert_eq!(ProductStatus::from_quantity(0), ProductStatus::OutOfStock);
        assert_eq!(ProductStatus::from_quantity(15), ProductStatus::LowStock);
        assert_eq!(
            ProductStatus::from_quantity(LOW_STOCK_THRESHOLD),
            ProductStatus::InStock
        );
        assert_eq!(ProductStatus::from_quantity(500), ProductStatus::InStock);
    }
}
