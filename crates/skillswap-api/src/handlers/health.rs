//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}

/// GET /api/health/detailed
///
/// Answers 503 when the database or avatar storage is unreachable.
pub async fn health_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<DetailedHealthResponse>>) {
    let database_ok = skillswap_database::connection::health_check(&state.db_pool)
        .await
        .unwrap_or(false);
    let storage_ok = state.avatars.health_check().await.unwrap_or(false);

    let healthy = database_ok && storage_ok;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse::ok(DetailedHealthResponse {
            status: if healthy { "ok" } else { "degraded" }.to_string(),
            database: reachability(database_ok),
            storage: reachability(storage_ok),
            storage_provider: state.avatars.provider_type().to_string(),
        })),
    )
}

fn reachability(ok: bool) -> String {
    if ok { "connected" } else { "unreachable" }.to_string()
}
