use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::subscriptions::SubscriptionEntity,
    value_objects::enums::subscription_statuses::SubscriptionStatus,
};

pub const TRIAL_PERIOD_DAYS: i64 = 30;
pub const PAID_PERIOD_DAYS: i64 = 365;

/// Subscription lifecycle. Each variant carries only the date that is meaningful for it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubscriptionState {
    Trial { trial_ends: DateTime<Utc> },
    Active { expires: DateTime<Utc> },
    Expired,
}

impl SubscriptionState {
    pub fn trial_from(now: DateTime<Utc>) -> Self {
        SubscriptionState::Trial {
            trial_ends: now + Duration::days(TRIAL_PERIOD_DAYS),
        }
    }

    pub fn paid_from(now: DateTime<Utc>) -> Self {
        SubscriptionState::Active {
            expires: paid_period_end(now),
        }
    }

    pub fn status(&self) -> SubscriptionStatus {
        match self {
            SubscriptionState::Trial { .. } => SubscriptionStatus::Trial,
            SubscriptionState::Active { .. } => SubscriptionStatus::Active,
            SubscriptionState::Expired => SubscriptionStatus::Expired,
        }
    }

    /// The state as it stands at `now`: a trial whose end date has passed is expired.
    /// Paid subscriptions are never demoted here.
    pub fn at(self, now: DateTime<Utc>) -> Self {
        match self {
            SubscriptionState::Trial { trial_ends } if trial_ends < now => {
                SubscriptionState::Expired
            }
            state => state,
        }
    }
}

pub fn paid_period_end(paid_at: DateTime<Utc>) -> DateTime<Utc> {
    paid_at + Duration::days(PAID_PERIOD_DAYS)
}

pub fn derive_status(subscription: &SubscriptionEntity, now: DateTime<Utc>) -> SubscriptionStatus {
    subscription.state.at(now).status()
}

/// True when the stored state is still a trial but the clock has moved past its end.
pub fn is_lapsed_trial(subscription: &SubscriptionEntity, now: DateTime<Utc>) -> bool {
    subscription.state.status() == SubscriptionStatus::Trial
        && derive_status(subscription, now) == SubscriptionStatus::Expired
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionModel {
    pub store_id: Uuid,
    #[serde(flatten)]
    pub state: SubscriptionState,
}

impl SubscriptionModel {
    pub fn from_entity(entity: SubscriptionEntity, now: DateTime<Utc>) -> Self {
        Self {
            store_id: entity.store_id,
            state: entity.state.at(now),
        }
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.state.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn subscription(state: SubscriptionState) -> SubscriptionEntity {
        SubscriptionEntity {
            store_id: Uuid::new_v4(),
            state,
        }
    }

    #[test]
    fn trial_is_thirty_days_long() {
        let state = SubscriptionState::trial_from(t0());
        assert_eq!(
            state,
            SubscriptionState::Trial {
                trial_ends: t0() + Duration::days(30)
            }
        );
    }

    #[test]
    fn trial_stays_trial_until_its_end_date() {
        let sub = subscription(SubscriptionState::trial_from(t0()));
        assert_eq!(derive_status(&sub, t0()), SubscriptionStatus::Trial);
        assert_eq!(
            derive_status(&sub, t0() + Duration::days(30)),
            SubscriptionStatus::Trial
        );
        assert!(!is_lapsed_trial(&sub, t0() + Duration::days(30)));
    }

    #[test]
    fn trial_expires_once_end_date_has_passed() {
        let sub = subscription(SubscriptionState::trial_from(t0()));
        let later = t0() + Duration::days(31);
        assert_eq!(derive_status(&sub, later), SubscriptionStatus::Expired);
        assert!(is_lapsed_trial(&sub, later));
    }

    #[test]
    fn paid_subscription_is_not_demoted() {
        let sub = subscription(SubscriptionState::paid_from(t0()));
        let long_after = t0() + Duration::days(PAID_PERIOD_DAYS + 10);
        assert_eq!(derive_status(&sub, long_after), SubscriptionStatus::Active);
        assert!(!is_lapsed_trial(&sub, long_after));
    }

    #[test]
    fn expired_is_not_a_lapsed_trial() {
        let sub = subscription(SubscriptionState::Expired);
        assert!(!is_lapsed_trial(&sub, t0()));
    }

    #[test]
    fn model_serializes_with_status_tag() {
        let model = SubscriptionModel {
            store_id: Uuid::nil(),
            state: SubscriptionState::Expired,
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["status"], "expired");
        assert!(json.get("trial_ends").is_none());
        assert!(json.get("expires").is_none());
    }
}
