//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account.
///
/// Inserting a user fires the `on_user_created` trigger, which creates the
/// matching [`Profile`](crate::profile::Profile) row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email, unique case-insensitively.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Metadata captured at signup (`{"name": ...}`).
    pub metadata: serde_json::Value,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Name supplied at signup, if any.
    pub fn signup_name(&self) -> Option<&str> {
        self.metadata.get("name").and_then(|v| v.as_str())
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address, stored lowercased.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Signup metadata.
    pub metadata: serde_json::Value,
}
