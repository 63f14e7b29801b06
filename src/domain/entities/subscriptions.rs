use uuid::Uuid;

use crate::domain::value_objects::subscriptions::SubscriptionState;

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionEntity {
    pub store_id: Uuid,
    pub state: SubscriptionState,
}
