//! Profile repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use skillswap_core::error::{AppError, ErrorKind};
use skillswap_core::result::AppResult;
use skillswap_entity::profile::{Profile, UpdateProfile};

/// Repository for profile rows.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the profile owned by `user_id`.
    pub async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    /// Batch-fetch the profiles `viewer_id` is allowed to read, ordered by name.
    pub async fn find_visible_by_user_ids(
        &self,
        user_ids: &[Uuid],
        viewer_id: Uuid,
    ) -> AppResult<Vec<Profile>> {
        sqlx::query_as::<_, Profile>(
            "SELECT * FROM profiles \
             WHERE user_id = ANY($1) AND (is_public OR user_id = $2) \
             ORDER BY name, user_id",
        )
        .bind(user_ids)
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch visible profiles", e)
        })
    }

    /// Overwrite the editable fields of a profile.
    pub async fn update(&self, user_id: Uuid, data: &UpdateProfile) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "UPDATE profiles SET name = $2, location = $3, availability = $4, is_public = $5 \
             WHERE user_id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(&data.name)
        .bind(&data.location)
        .bind(&data.availability)
        .bind(data.is_public)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))?
        .ok_or_else(|| AppError::not_found("Profile not found"))
    }

    /// Set the avatar reference of a profile.
    pub async fn set_photo_url(&self, user_id: Uuid, url: &str) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "UPDATE profiles SET profile_photo_url = $2 WHERE user_id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update profile photo", e)
        })?
        .ok_or_else(|| AppError::not_found("Profile not found"))
    }
}
