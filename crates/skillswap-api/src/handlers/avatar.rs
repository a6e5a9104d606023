//! Public avatar bytes.

use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use skillswap_core::error::AppError;

use crate::state::AppState;

/// GET /avatars/{*path}
pub async fn get(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let (data, mime_type) = state.avatars.get(&path).await?;

    Ok((
        [
            (CONTENT_TYPE, mime_type),
            (CACHE_CONTROL, "public, max-age=300".to_string()),
        ],
        data,
    )
        .into_response())
}
