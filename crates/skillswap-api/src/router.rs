//! Route definitions for the SkillSwap HTTP API.
//!
//! JSON routes are organized by page and mounted under `/api`; avatar
//! objects are served publicly under `/avatars`. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    let avatar_limit = state.config.storage.max_avatar_bytes;
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(profile_routes(avatar_limit))
        .merge(skill_routes())
        .merge(search_routes())
        .merge(swap_routes())
        .merge(feedback_routes())
        .merge(health_routes());

    let avatar_routes = Router::new().route("/avatars/{*path}", get(handlers::avatar::get));

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(avatar_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Account and session endpoints
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/session", get(handlers::auth::session))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// Own profile, avatar upload and other users' profiles
fn profile_routes(avatar_limit: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(handlers::profile::get_own).put(handlers::profile::update_own),
        )
        .route(
            "/profile/avatar",
            put(handlers::profile::upload_avatar).layer(DefaultBodyLimit::max(avatar_limit)),
        )
        .route("/profiles/{user_id}", get(handlers::profile::get_other))
}

/// Skill catalogue and the caller's skill lists
fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/skills", get(handlers::skill::catalogue))
        .route(
            "/skills/mine",
            get(handlers::skill::my_skills).post(handlers::skill::add),
        )
        .route(
            "/skills/mine/{id}",
            axum::routing::delete(handlers::skill::remove),
        )
}

/// Counterparty search
fn search_routes() -> Router<AppState> {
    Router::new().route("/search", get(handlers::search::search))
}

/// Swap request lifecycle
fn swap_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/swap-requests",
            get(handlers::swap::overview).post(handlers::swap::create),
        )
        .route(
            "/swap-requests/{id}",
            get(handlers::swap::get).delete(handlers::swap::delete),
        )
        .route("/swap-requests/{id}/accept", post(handlers::swap::accept))
        .route("/swap-requests/{id}/reject", post(handlers::swap::reject))
}

/// Feedback overview and submission
fn feedback_routes() -> Router<AppState> {
    Router::new().route(
        "/feedback",
        get(handlers::feedback::overview).post(handlers::feedback::submit),
    )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
