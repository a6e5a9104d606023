//! Swap request repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use skillswap_core::error::{AppError, ErrorKind};
use skillswap_core::result::AppResult;
use skillswap_entity::swap::{CreateSwapRequest, SwapRequest, SwapStatus};

/// Repository for swap requests.
///
/// Every read that returns more than one row is restricted to requests the
/// given user takes part in.
#[derive(Debug, Clone)]
pub struct SwapRequestRepository {
    pool: PgPool,
}

impl SwapRequestRepository {
    /// Create a new swap request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a request by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<SwapRequest>> {
        sqlx::query_as::<_, SwapRequest>("SELECT * FROM swap_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find swap request", e)
            })
    }

    /// All requests `user_id` sent or received, newest first.
    pub async fn find_for_participant(&self, user_id: Uuid) -> AppResult<Vec<SwapRequest>> {
        sqlx::query_as::<_, SwapRequest>(
            "SELECT * FROM swap_requests \
             WHERE requester_id = $1 OR recipient_id = $1 \
             ORDER BY created_at DESC, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list swap requests", e)
        })
    }

    /// Accepted requests `user_id` takes part in and has not reviewed yet.
    pub async fn find_awaiting_feedback(&self, user_id: Uuid) -> AppResult<Vec<SwapRequest>> {
        sqlx::query_as::<_, SwapRequest>(
            "SELECT s.* FROM swap_requests s \
             WHERE s.status = 'accepted' \
               AND (s.requester_id = $1 OR s.recipient_id = $1) \
               AND NOT EXISTS ( \
                   SELECT 1 FROM feedback f \
                   WHERE f.swap_request_id = s.id AND f.reviewer_id = $1) \
             ORDER BY s.updated_at DESC, s.id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list swaps awaiting feedback",
                e,
            )
        })
    }

    /// Insert a new pending request.
    pub async fn create(&self, data: &CreateSwapRequest) -> AppResult<SwapRequest> {
        sqlx::query_as::<_, SwapRequest>(
            "INSERT INTO swap_requests \
             (requester_id, recipient_id, offered_skill_id, wanted_skill_id, message) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.requester_id)
        .bind(data.recipient_id)
        .bind(data.offered_skill_id)
        .bind(data.wanted_skill_id)
        .bind(&data.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("swap_requests_distinct_parties") =>
            {
                AppError::validation("You cannot send a swap request to yourself")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create swap request", e),
        })
    }

    /// Move a still-pending request to `status`.
    ///
    /// Returns `None` when the row is gone, no longer pending, or `actor_id`
    /// is not a participant, so two racing decisions cannot both apply.
    pub async fn update_status_if_pending(
        &self,
        id: Uuid,
        actor_id: Uuid,
        status: SwapStatus,
    ) -> AppResult<Option<SwapRequest>> {
        sqlx::query_as::<_, SwapRequest>(
            "UPDATE swap_requests SET status = $3 \
             WHERE id = $1 AND status = 'pending' \
               AND (requester_id = $2 OR recipient_id = $2) \
             RETURNING *",
        )
        .bind(id)
        .bind(actor_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update swap status", e)
        })
    }

    /// Delete a pending request sent by `requester_id`.
    ///
    /// Returns whether a row was removed.
    pub async fn delete_pending(&self, id: Uuid, requester_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM swap_requests \
             WHERE id = $1 AND requester_id = $2 AND status = 'pending'",
        )
        .bind(id)
        .bind(requester_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete swap request", e)
        })?;
        Ok(result.rows_affected() > 0)
    }
}
