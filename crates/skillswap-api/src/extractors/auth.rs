//! `AuthUser` extractor: pulls the JWT from the Authorization header,
//! validates it and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use skillswap_core::error::AppError;
use skillswap_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Any handler taking `AuthUser` is a protected route: a missing, malformed,
/// expired or revoked token is rejected with 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        // Signature, expiry, token type and revocation are all checked here.
        let claims = state.jwt_decoder.decode_access_token(token).await?;

        Ok(AuthUser(RequestContext::new(
            claims.user_id(),
            claims.session_id(),
            claims.email,
        )))
    }
}
