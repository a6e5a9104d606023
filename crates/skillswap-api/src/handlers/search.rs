//! Search handler.

use axum::Json;
use axum::extract::{Query, State};

use skillswap_core::error::AppError;
use skillswap_service::views::SearchResult;

use crate::dto::request::SearchQuery;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/search?q=&scope=
pub async fn search(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<SearchResult>>>, AppError> {
    let results = state
        .search_service
        .search(&auth, &query.q, query.scope)
        .await?;
    Ok(Json(ApiResponse::ok(results)))
}
