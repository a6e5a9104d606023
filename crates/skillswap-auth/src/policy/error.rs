//! Policy denial reasons.

use skillswap_core::error::{AppError, ErrorKind};
use skillswap_entity::swap::SwapStatus;
use thiserror::Error;

/// Why a policy rule denied an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The profile is private and the viewer is not its owner.
    #[error("This profile is private")]
    ProfileHidden,
    /// Only the owner may write a profile.
    #[error("You can only edit your own profile")]
    NotProfileOwner,
    /// Only the owner may change a user skill.
    #[error("You can only change your own skills")]
    NotSkillOwner,
    /// Swap requests are visible to their two participants only.
    #[error("You are not a participant in this swap request")]
    NotSwapParticipant,
    /// A swap request must be sent as the acting user.
    #[error("Swap requests can only be sent on your own behalf")]
    RequesterMismatch,
    /// Only the requester may delete a swap request.
    #[error("Only the requester can delete a swap request")]
    NotRequester,
    /// The swap request has already been decided.
    #[error("Swap request is already {0}")]
    SwapNotPending(SwapStatus),
    /// The requested status change is not a valid transition.
    #[error("Cannot change swap request from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: SwapStatus,
        /// Requested status.
        to: SwapStatus,
    },
    /// Only accepted swaps can be reviewed.
    #[error("Feedback can only be left for accepted swaps")]
    SwapNotAccepted,
    /// Feedback is visible to its reviewer and reviewee only.
    #[error("You are not a party to this feedback")]
    NotFeedbackParty,
    /// Feedback must be written as the acting user.
    #[error("Feedback can only be written on your own behalf")]
    ReviewerMismatch,
    /// Avatar objects live under the owner's folder.
    #[error("Avatars can only be written under your own folder")]
    AvatarOutsideOwnFolder,
}

impl From<PolicyError> for AppError {
    fn from(err: PolicyError) -> Self {
        AppError::with_source(ErrorKind::Authorization, err.to_string(), err)
    }
}
