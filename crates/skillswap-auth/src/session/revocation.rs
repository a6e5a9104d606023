//! In-memory revocation list for signed-out sessions.

use std::time::Duration;

use moka::future::Cache;
use tracing::debug;
use uuid::Uuid;

/// Session ids ended by logout.
///
/// Entries expire after the refresh token lifetime, past which every token
/// of the session is expired anyway.
#[derive(Debug, Clone)]
pub struct SessionRevocations {
    revoked: Cache<Uuid, ()>,
}

impl SessionRevocations {
    /// Create a revocation list whose entries live for `ttl_seconds`.
    pub fn new(ttl_seconds: u64) -> Self {
        let revoked = Cache::builder()
            .max_capacity(100_000)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build();
        Self { revoked }
    }

    /// Mark a session as signed out.
    pub async fn revoke(&self, session_id: Uuid) {
        self.revoked.insert(session_id, ()).await;
        debug!(session_id = %session_id, "Session revoked");
    }

    /// Check whether a session was signed out.
    pub async fn is_revoked(&self, session_id: Uuid) -> bool {
        self.revoked.contains_key(&session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_revoke() {
        let revocations = SessionRevocations::new(60);
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        revocations.revoke(a).await;
        assert!(revocations.is_revoked(a).await);
        assert!(!revocations.is_revoked(b).await);
    }
}
