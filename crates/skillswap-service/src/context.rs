//! Request context carrying the authenticated user and session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Built by the route guard from a verified access token and passed into
/// service methods so that every operation knows *who* is acting and from
/// *which* session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The user's email (convenience field from JWT claims).
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, session_id: Uuid, email: String) -> Self {
        Self {
            user_id,
            session_id,
            email,
            request_time: Utc::now(),
        }
    }
}
