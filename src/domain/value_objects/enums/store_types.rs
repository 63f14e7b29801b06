use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreType {
    #[default]
    Producer,
    Wholesaler,
    Retailer,
    Transport,
}

impl StoreType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreType::Producer => "producer",
            StoreType::Wholesaler => "wholesaler",
            StoreType::Retailer => "retailer",
            StoreType::Transport => "transport",
        }
    }

    /// Label shown by the Arabic storefront.
    pub fn label_ar(&self) -> &'static str {
        match self {
            StoreType::Producer => "فلاح",
            StoreType::Wholesaler => "تاجر جملة",
            StoreType::Retailer => "تاجر تجزئة",
            StoreType::Transport => "نقل",
        }
    }
}

impl Display for StoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
