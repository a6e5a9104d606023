//! Feedback handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use skillswap_core::error::AppError;
use skillswap_service::views::{FeedbackOverview, FeedbackView};

use crate::dto::request::SubmitFeedbackRequest;
use crate::dto::response::ApiResponse;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/feedback
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<FeedbackOverview>>, AppError> {
    let overview = state.feedback_service.overview(&auth).await?;
    Ok(Json(ApiResponse::ok(overview)))
}

/// POST /api/feedback
pub async fn submit(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SubmitFeedbackRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FeedbackView>>), AppError> {
    let view = state.feedback_service.submit(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(view))))
}
