pub mod dashboard;
pub mod errors;
pub mod iam;
pub mod lifecycle;
pub mod storefront;
pub mod subscriptions;
