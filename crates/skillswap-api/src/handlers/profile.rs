//! Profile handlers: own profile, other profiles, avatar upload.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use uuid::Uuid;

use skillswap_core::error::AppError;
use skillswap_entity::profile::Profile;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::ApiResponse;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/profile
pub async fn get_own(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Profile>>, AppError> {
    let profile = state.profile_service.get_own(&auth).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/profile
pub async fn update_own(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<Profile>>, AppError> {
    let profile = state.profile_service.update(&auth, req.into()).await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/profile/avatar
///
/// The raw request body is the image; its `Content-Type` picks the format.
pub async fn upload_avatar(
    State(state): State<AppState>,
    auth: AuthUser,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<Profile>>, AppError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::validation("Missing Content-Type header"))?;

    let profile = state
        .profile_service
        .upload_avatar(&auth, content_type, body)
        .await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// GET /api/profiles/{user_id}
pub async fn get_other(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Profile>>, AppError> {
    let profile = state.profile_service.get(&auth, user_id).await?;
    Ok(Json(ApiResponse::ok(profile)))
}
