//! Skill entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A catalogue skill. Names are unique as stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    /// Unique skill identifier.
    pub id: Uuid,
    /// Skill name.
    pub name: String,
    /// Optional category (e.g. "Music").
    pub category: Option<String>,
    /// Moderation flag, defaults to approved.
    pub is_approved: bool,
    /// When the skill was first entered.
    pub created_at: DateTime<Utc>,
}
