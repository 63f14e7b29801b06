use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The mock gateway never fails, so completed is the only recorded outcome.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Completed,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Completed => f.write_str("completed"),
        }
    }
}
