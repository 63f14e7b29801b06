pub mod dashboard;
pub mod enums;
pub mod iam;
pub mod payments;
pub mod products;
pub mod stores;
pub mod storefront;
pub mod subscriptions;
