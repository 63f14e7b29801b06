pub mod payment_methods;
pub mod payment_statuses;
pub mod product_statuses;
pub mod store_statuses;
pub mod store_types;
pub mod subscription_statuses;
pub mod user_roles;
