//! Feedback repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use skillswap_core::error::{AppError, ErrorKind};
use skillswap_core::result::AppResult;
use skillswap_entity::feedback::{CreateFeedback, Feedback};

/// Repository for feedback rows.
#[derive(Debug, Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    /// Create a new feedback repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Feedback written about `user_id`, newest first.
    pub async fn find_by_reviewee(&self, user_id: Uuid) -> AppResult<Vec<Feedback>> {
        sqlx::query_as::<_, Feedback>(
            "SELECT * FROM feedback WHERE reviewee_id = $1 ORDER BY created_at DESC, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list received feedback", e)
        })
    }

    /// Feedback written by `user_id`, newest first.
    pub async fn find_by_reviewer(&self, user_id: Uuid) -> AppResult<Vec<Feedback>> {
        sqlx::query_as::<_, Feedback>(
            "SELECT * FROM feedback WHERE reviewer_id = $1 ORDER BY created_at DESC, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list given feedback", e)
        })
    }

    /// Insert a feedback row.
    pub async fn create(&self, data: &CreateFeedback) -> AppResult<Feedback> {
        sqlx::query_as::<_, Feedback>(
            "INSERT INTO feedback (swap_request_id, reviewer_id, reviewee_id, rating, comment) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.swap_request_id)
        .bind(data.reviewer_id)
        .bind(data.reviewee_id)
        .bind(data.rating.value())
        .bind(&data.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("feedback_swap_reviewer_key") =>
            {
                AppError::conflict("You have already left feedback for this swap")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create feedback", e),
        })
    }
}
