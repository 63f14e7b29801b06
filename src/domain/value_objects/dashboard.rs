use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    products::ProductModel, stores::StoreModel, subscriptions::SubscriptionModel,
};

pub const RECENT_PRODUCTS_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardOverviewModel {
    pub store: StoreModel,
    pub product_count: usize,
    pub subscription: Option<SubscriptionModel>,
    pub recent_products: Vec<ProductModel>,
}
