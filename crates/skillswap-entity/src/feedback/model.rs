//! Feedback entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::rating::Rating;

/// A review left by one participant of an accepted swap about the other.
///
/// Immutable once written; at most one per (swap request, reviewer).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    /// Unique feedback identifier.
    pub id: Uuid,
    /// The swap this feedback is about.
    pub swap_request_id: Uuid,
    /// Author.
    pub reviewer_id: Uuid,
    /// Subject.
    pub reviewee_id: Uuid,
    /// Score from 1 to 5.
    pub rating: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
    /// When the feedback was written.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a feedback row.
#[derive(Debug, Clone)]
pub struct CreateFeedback {
    /// Swap being reviewed.
    pub swap_request_id: Uuid,
    /// Author.
    pub reviewer_id: Uuid,
    /// Subject.
    pub reviewee_id: Uuid,
    /// Validated score.
    pub rating: Rating,
    /// Optional comment.
    pub comment: Option<String>,
}
