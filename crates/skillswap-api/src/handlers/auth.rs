//! Auth handlers: register, login, refresh, session restore, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use skillswap_auth::jwt::TokenPair;
use skillswap_core::error::AppError;
use skillswap_service::account::service::{AuthSession, Registration};

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthSession>>), AppError> {
    let session = state
        .account_service
        .register(Registration {
            email: req.email,
            password: req.password,
            name: req.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(session))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthSession>>, AppError> {
    let session = state
        .account_service
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(session)))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> Result<Json<ApiResponse<TokenPair>>, AppError> {
    let tokens = state.account_service.refresh(&req.refresh_token).await?;
    Ok(Json(ApiResponse::ok(tokens)))
}

/// GET /api/auth/session
pub async fn session(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<AuthSession>>, AppError> {
    let session = state.account_service.restore(&auth).await?;
    Ok(Json(ApiResponse::ok(session)))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.account_service.logout(&auth).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Logged out successfully",
    ))))
}
