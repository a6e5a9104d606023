//! Swap request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use skillswap_core::error::AppError;
use skillswap_service::views::{SwapOverview, SwapRequestView};

use crate::dto::request::CreateSwapRequestBody;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/swap-requests
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<SwapOverview>>, AppError> {
    let overview = state.swap_service.overview(&auth).await?;
    Ok(Json(ApiResponse::ok(overview)))
}

/// POST /api/swap-requests
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateSwapRequestBody>,
) -> Result<(StatusCode, Json<ApiResponse<SwapRequestView>>), AppError> {
    let view = state.swap_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(view))))
}

/// GET /api/swap-requests/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SwapRequestView>>, AppError> {
    let view = state.swap_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// DELETE /api/swap-requests/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.swap_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Swap request deleted",
    ))))
}

/// POST /api/swap-requests/{id}/accept
pub async fn accept(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SwapRequestView>>, AppError> {
    let view = state.swap_service.accept(&auth, id).await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// POST /api/swap-requests/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SwapRequestView>>, AppError> {
    let view = state.swap_service.reject(&auth, id).await?;
    Ok(Json(ApiResponse::ok(view)))
}
