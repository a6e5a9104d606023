//! Application builder: wires repositories, auth and services into
//! `AppState`, then router + middleware into an Axum app.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use sqlx::PgPool;
use tracing::info;

use skillswap_auth::jwt::{JwtDecoder, JwtEncoder};
use skillswap_auth::password::{PasswordHasher, PasswordValidator};
use skillswap_auth::session::SessionRevocations;
use skillswap_core::config::AppConfig;
use skillswap_core::result::AppResult;
use skillswap_core::traits::StorageProvider;
use skillswap_database::repositories::{
    FeedbackRepository, ProfileRepository, SkillRepository, SwapRequestRepository,
    UserRepository, UserSkillRepository,
};
use skillswap_service::{
    AccountService, FeedbackService, ProfileService, SearchService, SkillService, SwapService,
};
use skillswap_storage::{AvatarStore, LocalStorageProvider};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs every shared dependency on top of an existing pool.
///
/// The pool may be lazy; nothing here touches the database.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> AppResult<AppState> {
    // ── Storage ──────────────────────────────────────────────────
    let provider: Arc<dyn StorageProvider> =
        Arc::new(LocalStorageProvider::new(&config.storage.avatar_root).await?);
    let avatars = Arc::new(AvatarStore::new(provider, &config.storage));
    info!(root = %config.storage.avatar_root, "Avatar storage ready");

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let profile_repo = Arc::new(ProfileRepository::new(db_pool.clone()));
    let skill_repo = Arc::new(SkillRepository::new(db_pool.clone()));
    let user_skill_repo = Arc::new(UserSkillRepository::new(db_pool.clone()));
    let swap_repo = Arc::new(SwapRequestRepository::new(db_pool.clone()));
    let feedback_repo = Arc::new(FeedbackRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────────
    // Revocations outlive the longest token of a signed-out session.
    let revocations = Arc::new(SessionRevocations::new(
        config.auth.jwt_refresh_ttl_hours * 3600,
    ));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth, Arc::clone(&revocations)));
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));

    // ── Services ─────────────────────────────────────────────────
    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&profile_repo),
        password_hasher,
        password_validator,
        jwt_encoder,
        Arc::clone(&jwt_decoder),
        revocations,
    ));
    let profile_service = Arc::new(ProfileService::new(
        Arc::clone(&profile_repo),
        Arc::clone(&avatars),
    ));
    let skill_service = Arc::new(SkillService::new(
        Arc::clone(&skill_repo),
        Arc::clone(&user_skill_repo),
    ));
    let search_service = Arc::new(SearchService::new(
        Arc::clone(&skill_repo),
        Arc::clone(&user_skill_repo),
        Arc::clone(&profile_repo),
    ));
    let swap_service = Arc::new(SwapService::new(
        Arc::clone(&swap_repo),
        Arc::clone(&profile_repo),
        Arc::clone(&skill_repo),
        Arc::clone(&user_skill_repo),
    ));
    let feedback_service = Arc::new(FeedbackService::new(
        feedback_repo,
        swap_repo,
        profile_repo,
        skill_repo,
    ));

    Ok(AppState {
        config: Arc::new(config),
        started_at: Instant::now(),
        db_pool,
        avatars,
        jwt_decoder,
        account_service,
        profile_service,
        skill_service,
        search_service,
        swap_service,
        feedback_service,
    })
}
