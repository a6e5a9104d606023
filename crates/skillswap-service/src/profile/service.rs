//! Profile read/update and avatar upload.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use skillswap_auth::policy;
use skillswap_core::error::AppError;
use skillswap_database::repositories::ProfileRepository;
use skillswap_entity::profile::{Profile, UpdateProfile};
use skillswap_storage::avatar::{AvatarFormat, AvatarStore};

use crate::context::RequestContext;

/// Maximum display name length in characters.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum location/availability length in characters.
pub const MAX_DETAIL_LEN: usize = 200;

/// Profile operations for the acting user.
#[derive(Debug, Clone)]
pub struct ProfileService {
    /// Profile repository.
    profile_repo: Arc<ProfileRepository>,
    /// Avatar bucket.
    avatars: Arc<AvatarStore>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(profile_repo: Arc<ProfileRepository>, avatars: Arc<AvatarStore>) -> Self {
        Self {
            profile_repo,
            avatars,
        }
    }

    /// The acting user's own profile.
    pub async fn get_own(&self, ctx: &RequestContext) -> Result<Profile, AppError> {
        self.profile_repo
            .find_by_user_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))
    }

    /// Another user's profile, subject to its visibility flag.
    pub async fn get(&self, ctx: &RequestContext, user_id: Uuid) -> Result<Profile, AppError> {
        let profile = self
            .profile_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))?;
        policy::profile::can_read(ctx.user_id, &profile)?;
        Ok(profile)
    }

    /// Update the acting user's profile.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        data: UpdateProfile,
    ) -> Result<Profile, AppError> {
        policy::profile::can_write(ctx.user_id, ctx.user_id)?;
        let data = normalize_update(data)?;

        let profile = self.profile_repo.update(ctx.user_id, &data).await?;

        info!(
            user_id = %ctx.user_id,
            is_public = profile.is_public,
            "Profile updated"
        );

        Ok(profile)
    }

    /// Store a new avatar and point the profile at it.
    pub async fn upload_avatar(
        &self,
        ctx: &RequestContext,
        content_type: &str,
        data: Bytes,
    ) -> Result<Profile, AppError> {
        let format = AvatarFormat::from_content_type(content_type)?;
        let object_path = AvatarStore::object_path(ctx.user_id, format);
        policy::avatar::can_write(ctx.user_id, &object_path)?;

        let url = self.avatars.put(&object_path, data).await?;
        let profile = self.profile_repo.set_photo_url(ctx.user_id, &url).await?;

        if let Err(e) = self.avatars.remove_other_formats(ctx.user_id, format).await {
            warn!(user_id = %ctx.user_id, error = %e, "Failed to remove previous avatar");
        }

        info!(user_id = %ctx.user_id, path = %object_path, "Avatar updated");

        Ok(profile)
    }
}

/// Trim and validate profile fields. Blank optional fields become `None`.
pub fn normalize_update(data: UpdateProfile) -> Result<UpdateProfile, AppError> {
    let name = data.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }

    Ok(UpdateProfile {
        name,
        location: optional_detail("Location", data.location)?,
        availability: optional_detail("Availability", data.availability)?,
        is_public: data.is_public,
    })
}

fn optional_detail(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().count() > MAX_DETAIL_LEN {
        return Err(AppError::validation(format!(
            "{field} must be at most {MAX_DETAIL_LEN} characters"
        )));
    }
    Ok(Some(value.to_string()))
}
