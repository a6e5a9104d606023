//! User skill entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::skill_type::SkillType;

/// Links a user to a catalogue skill, tagged offered or wanted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSkill {
    /// Unique row identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Referenced skill.
    pub skill_id: Uuid,
    /// Offered or wanted.
    pub skill_type: SkillType,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}
