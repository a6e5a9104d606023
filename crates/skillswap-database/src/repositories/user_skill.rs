//! User skill repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use skillswap_core::error::{AppError, ErrorKind};
use skillswap_core::result::AppResult;
use skillswap_entity::skill::{SkillType, UserSkill};

/// Repository for the user/skill link table.
#[derive(Debug, Clone)]
pub struct UserSkillRepository {
    pool: PgPool,
}

impl UserSkillRepository {
    /// Create a new user skill repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a row by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserSkill>> {
        sqlx::query_as::<_, UserSkill>("SELECT * FROM user_skills WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user skill", e)
            })
    }

    /// All skills of one user, oldest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<UserSkill>> {
        sqlx::query_as::<_, UserSkill>(
            "SELECT * FROM user_skills WHERE user_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user skills", e))
    }

    /// Skills of the given type for a set of users.
    pub async fn find_by_users_and_type(
        &self,
        user_ids: &[Uuid],
        skill_type: SkillType,
    ) -> AppResult<Vec<UserSkill>> {
        sqlx::query_as::<_, UserSkill>(
            "SELECT * FROM user_skills WHERE user_id = ANY($1) AND skill_type = $2 \
             ORDER BY created_at, id",
        )
        .bind(user_ids)
        .bind(skill_type)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to batch-fetch user skills", e)
        })
    }

    /// Distinct users holding any of `skill_ids` with one of `types`.
    ///
    /// The searching user and owners of non-public profiles are excluded.
    pub async fn find_public_holders(
        &self,
        skill_ids: &[Uuid],
        types: &[SkillType],
        exclude_user: Uuid,
    ) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT DISTINCT us.user_id FROM user_skills us \
             JOIN profiles p ON p.user_id = us.user_id \
             WHERE us.skill_id = ANY($1) AND us.skill_type = ANY($2) \
               AND us.user_id <> $3 AND p.is_public",
        )
        .bind(skill_ids)
        .bind(types)
        .bind(exclude_user)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find skill holders", e)
        })
    }

    /// Whether `user_id` holds `skill_id` with the given type.
    pub async fn exists(
        &self,
        user_id: Uuid,
        skill_id: Uuid,
        skill_type: SkillType,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM user_skills \
             WHERE user_id = $1 AND skill_id = $2 AND skill_type = $3)",
        )
        .bind(user_id)
        .bind(skill_id)
        .bind(skill_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check user skill", e))
    }

    /// Attach a skill to a user.
    pub async fn create(
        &self,
        user_id: Uuid,
        skill_id: Uuid,
        skill_type: SkillType,
    ) -> AppResult<UserSkill> {
        sqlx::query_as::<_, UserSkill>(
            "INSERT INTO user_skills (user_id, skill_id, skill_type) VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(user_id)
        .bind(skill_id)
        .bind(skill_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("user_skills_user_skill_type_key") =>
            {
                AppError::conflict(format!("Skill is already in your {skill_type} list"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to add user skill", e),
        })
    }

    /// Delete a row owned by `user_id`. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM user_skills WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete user skill", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
