pub mod payments;
pub mod products;
pub mod stores;
pub mod subscriptions;
pub mod users;
