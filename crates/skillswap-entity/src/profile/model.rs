//! Profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Public-facing profile, one per user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// Owning user (primary key).
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-text location.
    pub location: Option<String>,
    /// Public URL of the avatar object.
    pub profile_photo_url: Option<String>,
    /// Free-text availability (e.g. "weekends").
    pub availability: Option<String>,
    /// Whether other users may see this profile.
    pub is_public: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for updating a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name.
    pub name: String,
    /// New location.
    pub location: Option<String>,
    /// New availability text.
    pub availability: Option<String>,
    /// New visibility flag.
    pub is_public: bool,
}
