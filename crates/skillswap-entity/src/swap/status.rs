//! Swap request status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a swap request.
///
/// `Pending` is the only state with outgoing transitions; `Accepted` and
/// `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "swap_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    /// Awaiting a decision from the recipient.
    Pending,
    /// The swap was agreed.
    Accepted,
    /// The swap was declined.
    Rejected,
}

impl SwapStatus {
    /// Check if the request is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Check whether moving from `self` to `next` is allowed.
    pub fn can_transition_to(&self, next: SwapStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted) | (Self::Pending, Self::Rejected)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SwapStatus {
    type Err = skillswap_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(skillswap_core::AppError::validation(format!(
                "Invalid swap status: '{s}'. Expected one of: pending, accepted, rejected"
            ))),
        }
    }
}
