//! JWT token validation and revocation checking.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use skillswap_core::config::auth::AuthConfig;
use skillswap_core::error::AppError;

use super::claims::{Claims, TokenType};
use crate::session::SessionRevocations;

/// Validates JWT tokens and rejects tokens of revoked sessions.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Sessions ended by logout.
    revocations: Arc<SessionRevocations>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, revocations: Arc<SessionRevocations>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds of clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            revocations,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks:
    /// 1. Signature validity
    /// 2. Expiration
    /// 3. Token type is Access
    /// 4. Session not revoked
    pub async fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_checked(token, TokenType::Access).await
    }

    /// Decodes and validates a refresh token string.
    pub async fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_checked(token, TokenType::Refresh).await
    }

    async fn decode_checked(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != expected {
            return Err(AppError::unauthorized(match expected {
                TokenType::Access => "Invalid token type: expected access token",
                TokenType::Refresh => "Invalid token type: expected refresh token",
            }));
        }

        if self.revocations.is_revoked(claims.sid).await {
            return Err(AppError::unauthorized("Session has been signed out"));
        }

        Ok(claims)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use skillswap_core::error::ErrorKind;
    use uuid::Uuid;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    fn decoder(secret: &str) -> (JwtDecoder, Arc<SessionRevocations>) {
        let revocations = Arc::new(SessionRevocations::new(3600));
        (
            JwtDecoder::new(&config(secret), revocations.clone()),
            revocations,
        )
    }

    #[tokio::test]
    async fn test_round_trip_access_token() {
        let encoder = JwtEncoder::new(&config("s3cret"));
        let (decoder, _) = decoder("s3cret");
        let (user, session) = (Uuid::new_v4(), Uuid::new_v4());

        let pair = encoder
            .generate_token_pair(user, session, "ana@example.com")
            .unwrap();
        let claims = decoder.decode_access_token(&pair.access_token).await.unwrap();

        assert_eq!(claims.user_id(), user);
        assert_eq!(claims.session_id(), session);
        assert_eq!(claims.email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_token_type_is_enforced() {
        let encoder = JwtEncoder::new(&config("s3cret"));
        let (decoder, _) = decoder("s3cret");
        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), Uuid::new_v4(), "a@b.c")
            .unwrap();

        assert!(decoder.decode_access_token(&pair.refresh_token).await.is_err());
        assert!(decoder.decode_refresh_token(&pair.access_token).await.is_err());
        assert!(decoder.decode_refresh_token(&pair.refresh_token).await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&config("one"));
        let (decoder, _) = decoder("two");
        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), Uuid::new_v4(), "a@b.c")
            .unwrap();

        let err = decoder.decode_access_token(&pair.access_token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn test_revoked_session_rejected() {
        let encoder = JwtEncoder::new(&config("s3cret"));
        let (decoder, revocations) = decoder("s3cret");
        let session = Uuid::new_v4();
        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), session, "a@b.c")
            .unwrap();

        revocations.revoke(session).await;

        assert!(decoder.decode_access_token(&pair.access_token).await.is_err());
        assert!(decoder.decode_refresh_token(&pair.refresh_token).await.is_err());
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let (decoder, _) = decoder("s3cret");
        let err = decoder.decode_access_token("not.a.jwt").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }
}
