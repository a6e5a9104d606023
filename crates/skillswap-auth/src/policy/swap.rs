//! Swap request rules.
//!
//! Either participant may decide a pending request. This mirrors the
//! stored row policy, which does not single out the recipient.

use uuid::Uuid;

use skillswap_entity::swap::{SwapRequest, SwapStatus};

use super::{PolicyError, PolicyResult};

/// Only the requester or the recipient may read a request.
pub fn can_read(actor: Uuid, swap: &SwapRequest) -> PolicyResult {
    if swap.is_participant(actor) {
        Ok(())
    } else {
        Err(PolicyError::NotSwapParticipant)
    }
}

/// A request may only be inserted with the acting user as requester.
pub fn can_insert(actor: Uuid, requester: Uuid) -> PolicyResult {
    if actor == requester {
        Ok(())
    } else {
        Err(PolicyError::RequesterMismatch)
    }
}

/// A participant may move a pending request to accepted or rejected.
pub fn can_update_status(actor: Uuid, swap: &SwapRequest, next: SwapStatus) -> PolicyResult {
    can_read(actor, swap)?;
    if swap.status.is_terminal() {
        return Err(PolicyError::SwapNotPending(swap.status));
    }
    if !swap.status.can_transition_to(next) {
        return Err(PolicyError::InvalidTransition {
            from: swap.status,
            to: next,
        });
    }
    Ok(())
}

/// Only the requester may delete, and only while the request is pending.
pub fn can_delete(actor: Uuid, swap: &SwapRequest) -> PolicyResult {
    if swap.requester_id != actor {
        return Err(PolicyError::NotRequester);
    }
    if swap.status != SwapStatus::Pending {
        return Err(PolicyError::SwapNotPending(swap.status));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    struct Parties {
        requester: Uuid,
        recipient: Uuid,
        outsider: Uuid,
    }

    fn parties() -> Parties {
        Parties {
            requester: Uuid::new_v4(),
            recipient: Uuid::new_v4(),
            outsider: Uuid::new_v4(),
        }
    }

    fn swap(p: &Parties, status: SwapStatus) -> SwapRequest {
        SwapRequest {
            id: Uuid::new_v4(),
            requester_id: p.requester,
            recipient_id: p.recipient,
            offered_skill_id: Uuid::new_v4(),
            wanted_skill_id: Uuid::new_v4(),
            message: Some("Spanish for guitar?".into()),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_read_participants_only() {
        let p = parties();
        let s = swap(&p, SwapStatus::Pending);
        assert!(can_read(p.requester, &s).is_ok());
        assert!(can_read(p.recipient, &s).is_ok());
        assert_eq!(can_read(p.outsider, &s), Err(PolicyError::NotSwapParticipant));
    }

    #[test]
    fn test_insert_as_self_only() {
        let p = parties();
        assert!(can_insert(p.requester, p.requester).is_ok());
        assert_eq!(
            can_insert(p.outsider, p.requester),
            Err(PolicyError::RequesterMismatch)
        );
    }

    #[test]
    fn test_either_participant_may_decide_pending() {
        let p = parties();
        let s = swap(&p, SwapStatus::Pending);
        assert!(can_update_status(p.recipient, &s, SwapStatus::Accepted).is_ok());
        assert!(can_update_status(p.requester, &s, SwapStatus::Rejected).is_ok());
        assert_eq!(
            can_update_status(p.outsider, &s, SwapStatus::Accepted),
            Err(PolicyError::NotSwapParticipant)
        );
    }

    #[test]
    fn test_no_transition_out_of_terminal_state() {
        let p = parties();
        for status in [SwapStatus::Accepted, SwapStatus::Rejected] {
            let s = swap(&p, status);
            for next in [SwapStatus::Pending, SwapStatus::Accepted, SwapStatus::Rejected] {
                assert_eq!(
                    can_update_status(p.recipient, &s, next),
                    Err(PolicyError::SwapNotPending(status))
                );
            }
        }
    }

    #[test]
    fn test_same_state_transition_rejected() {
        let p = parties();
        let s = swap(&p, SwapStatus::Pending);
        assert_eq!(
            can_update_status(p.recipient, &s, SwapStatus::Pending),
            Err(PolicyError::InvalidTransition {
                from: SwapStatus::Pending,
                to: SwapStatus::Pending
            })
        );
    }

    #[test]
    fn test_delete_requester_while_pending() {
        let p = parties();
        let pending = swap(&p, SwapStatus::Pending);
        assert!(can_delete(p.requester, &pending).is_ok());
        assert_eq!(can_delete(p.recipient, &pending), Err(PolicyError::NotRequester));

        let accepted = swap(&p, SwapStatus::Accepted);
        assert_eq!(
            can_delete(p.requester, &accepted),
            Err(PolicyError::SwapNotPending(SwapStatus::Accepted))
        );
    }
}
