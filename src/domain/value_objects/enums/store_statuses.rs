use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    PendingVerification,
    Trial,
    Active,
    Suspended,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::PendingVerification => "pending_verification",
            StoreStatus::Trial => "trial",
            StoreStatus::Active => "active",
            StoreStatus::Suspended => "suspended",
        }
    }

    /// Only trial and active stores (and their products) show up on the public storefront.
    pub fn is_publicly_visible(&self) -> bool {
        matches!(self, StoreStatus::Trial | StoreStatus::Active)
    }
}

impl Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_trial_and_active_are_public() {
        assert!(StoreStatus::Trial.is_publicly_visible());
        assert!(StoreStatus::Active.is_publicly_visible());
        assert!(!StoreStatus::PendingVerification.is_publicly_visible());
        assert!(!StoreStatus::Suspended.is_publicly_visible());
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&StoreStatus::PendingVerification).unwrap();
        assert_eq!(json, "\"pending_verification\"");
    }
}
