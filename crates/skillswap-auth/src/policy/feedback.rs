//! Feedback rules.

use uuid::Uuid;

use skillswap_entity::feedback::Feedback;
use skillswap_entity::swap::{SwapRequest, SwapStatus};

use super::{PolicyError, PolicyResult};

/// Only the reviewer or the reviewee may read a feedback row.
pub fn can_read(actor: Uuid, feedback: &Feedback) -> PolicyResult {
    if feedback.reviewer_id == actor || feedback.reviewee_id == actor {
        Ok(())
    } else {
        Err(PolicyError::NotFeedbackParty)
    }
}

/// Feedback may only be inserted with the acting user as reviewer.
pub fn can_insert(actor: Uuid, reviewer: Uuid) -> PolicyResult {
    if actor == reviewer {
        Ok(())
    } else {
        Err(PolicyError::ReviewerMismatch)
    }
}

/// The actor takes part in `swap` and the swap has been accepted.
pub fn can_review_swap(actor: Uuid, swap: &SwapRequest) -> PolicyResult {
    if !swap.is_participant(actor) {
        return Err(PolicyError::NotSwapParticipant);
    }
    if swap.status != SwapStatus::Accepted {
        return Err(PolicyError::SwapNotAccepted);
    }
    Ok(())
}
