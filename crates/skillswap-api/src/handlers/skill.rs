//! Skills page handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use skillswap_core::error::AppError;
use skillswap_entity::skill::Skill;
use skillswap_service::views::{MySkills, UserSkillView};

use crate::dto::request::AddSkillRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/skills
pub async fn catalogue(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Skill>>>, AppError> {
    let skills = state.skill_service.catalogue().await?;
    Ok(Json(ApiResponse::ok(skills)))
}

/// GET /api/skills/mine
pub async fn my_skills(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MySkills>>, AppError> {
    let skills = state.skill_service.my_skills(&auth).await?;
    Ok(Json(ApiResponse::ok(skills)))
}

/// POST /api/skills/mine
pub async fn add(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<AddSkillRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserSkillView>>), AppError> {
    let view = state.skill_service.add(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(view))))
}

/// DELETE /api/skills/mine/{id}
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.skill_service.remove(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Skill removed"))))
}
