//! Account and session flows.
//!
//! A session is identified by the `sid` claim shared by its access and
//! refresh tokens. Logout revokes the session id; every token carrying it is
//! rejected from then on.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use skillswap_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use skillswap_auth::password::{PasswordHasher, PasswordValidator};
use skillswap_auth::session::SessionRevocations;
use skillswap_core::error::AppError;
use skillswap_database::repositories::{ProfileRepository, UserRepository};
use skillswap_entity::profile::Profile;
use skillswap_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// Signup data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Display name seeded into the profile.
    pub name: String,
}

/// Public account fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountView {
    /// User id.
    pub id: Uuid,
    /// Login email.
    pub email: String,
}

impl From<&User> for AccountView {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            email: u.email.clone(),
        }
    }
}

/// Current user, profile and (on sign-in) tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// The signed-in account.
    pub user: AccountView,
    /// The account's profile.
    pub profile: Option<Profile>,
    /// Issued tokens; absent on session restore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenPair>,
}

/// Account operations.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Profile repository.
    profile_repo: Arc<ProfileRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
    /// Token verifier.
    decoder: Arc<JwtDecoder>,
    /// Signed-out sessions.
    revocations: Arc<SessionRevocations>,
}

impl AccountService {
    /// Creates a new account service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<UserRepository>,
        profile_repo: Arc<ProfileRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        revocations: Arc<SessionRevocations>,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            hasher,
            validator,
            encoder,
            decoder,
            revocations,
        }
    }

    /// Create an account and sign it in.
    ///
    /// The profile row is created by the database on insert.
    pub async fn register(&self, req: Registration) -> Result<AuthSession, AppError> {
        let email = normalize_email(&req.email);
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        self.validator.validate(&req.password)?;

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                password_hash,
                metadata: serde_json::json!({ "name": name }),
            })
            .await?;

        info!(user_id = %user.id, "Account registered");

        self.start_session(user).await
    }

    /// Sign in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let email = normalize_email(email);
        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            warn!("Login failed: unknown email");
            return Err(invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(invalid_credentials());
        }

        self.start_session(user).await
    }

    /// Exchange a refresh token for a new pair in the same session.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.decoder.decode_refresh_token(refresh_token).await?;
        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;

        let tokens = self
            .encoder
            .generate_token_pair(user.id, claims.session_id(), &user.email)?;

        info!(user_id = %user.id, session_id = %claims.session_id(), "Tokens refreshed");
        Ok(tokens)
    }

    /// The current user and profile for an authenticated request.
    pub async fn restore(&self, ctx: &RequestContext) -> Result<AuthSession, AppError> {
        let user = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;
        let profile = self.profile_repo.find_by_user_id(user.id).await?;

        Ok(AuthSession {
            user: AccountView::from(&user),
            profile,
            tokens: None,
        })
    }

    /// End the current session.
    pub async fn logout(&self, ctx: &RequestContext) -> Result<(), AppError> {
        self.revocations.revoke(ctx.session_id).await;
        info!(user_id = %ctx.user_id, session_id = %ctx.session_id, "Signed out");
        Ok(())
    }

    async fn start_session(&self, user: User) -> Result<AuthSession, AppError> {
        let session_id = Uuid::new_v4();
        let tokens = self
            .encoder
            .generate_token_pair(user.id, session_id, &user.email)?;
        let profile = self.profile_repo.find_by_user_id(user.id).await?;

        info!(user_id = %user.id, session_id = %session_id, "Session started");

        Ok(AuthSession {
            user: AccountView::from(&user),
            profile,
            tokens: Some(tokens),
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid email or password")
}

/// Canonical stored form of an email. Format is checked at the request edge.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
