//! Swap request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::SwapStatus;

/// A proposal to exchange one offered skill for one wanted skill.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SwapRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// The user who sent the request.
    pub requester_id: Uuid,
    /// The user who received the request.
    pub recipient_id: Uuid,
    /// Skill the requester offers in exchange.
    pub offered_skill_id: Uuid,
    /// Skill the requester wants from the recipient.
    pub wanted_skill_id: Uuid,
    /// Optional note from the requester.
    pub message: Option<String>,
    /// Current lifecycle state.
    pub status: SwapStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
}

impl SwapRequest {
    /// Whether `user_id` is the requester or the recipient.
    pub fn is_participant(&self, user_id: Uuid) -> bool {
        self.requester_id == user_id || self.recipient_id == user_id
    }

    /// The participant on the other side from `user_id`.
    ///
    /// Returns `None` when `user_id` does not take part in the swap.
    pub fn counterpart_of(&self, user_id: Uuid) -> Option<Uuid> {
        if self.requester_id == user_id {
            Some(self.recipient_id)
        } else if self.recipient_id == user_id {
            Some(self.requester_id)
        } else {
            None
        }
    }
}

/// Data required to create a swap request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSwapRequest {
    /// Sender.
    pub requester_id: Uuid,
    /// Receiver.
    pub recipient_id: Uuid,
    /// Skill offered by the sender.
    pub offered_skill_id: Uuid,
    /// Skill wanted from the receiver.
    pub wanted_skill_id: Uuid,
    /// Optional note.
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap(requester: Uuid, recipient: Uuid) -> SwapRequest {
        SwapRequest {
            id: Uuid::new_v4(),
            requester_id: requester,
            recipient_id: recipient,
            offered_skill_id: Uuid::new_v4(),
            wanted_skill_id: Uuid::new_v4(),
            message: None,
            status: SwapStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_counterpart() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let s = swap(a, b);
        assert_eq!(s.counterpart_of(a), Some(b));
        assert_eq!(s.counterpart_of(b), Some(a));
        assert_eq!(s.counterpart_of(Uuid::new_v4()), None);
    }

    #[test]
    fn test_is_participant() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let s = swap(a, b);
        assert!(s.is_participant(a));
        assert!(s.is_participant(b));
        assert!(!s.is_participant(Uuid::new_v4()));
    }
}
