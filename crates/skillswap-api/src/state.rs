//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use sqlx::PgPool;

use skillswap_auth::jwt::JwtDecoder;
use skillswap_core::config::AppConfig;
use skillswap_storage::AvatarStore;

use skillswap_service::{
    AccountService, FeedbackService, ProfileService, SearchService, SkillService, SwapService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start, for uptime reporting
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Avatar object store
    pub avatars: Arc<AvatarStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login and session lifecycle
    pub account_service: Arc<AccountService>,
    /// Own and other profiles, avatar upload
    pub profile_service: Arc<ProfileService>,
    /// Skill catalogue and the user's skill lists
    pub skill_service: Arc<SkillService>,
    /// Counterparty search
    pub search_service: Arc<SearchService>,
    /// Swap request lifecycle
    pub swap_service: Arc<SwapService>,
    /// Feedback eligibility and submission
    pub feedback_service: Arc<FeedbackService>,
}
