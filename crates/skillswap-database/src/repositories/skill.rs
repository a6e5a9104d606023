//! Skill catalogue repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use skillswap_core::error::{AppError, ErrorKind};
use skillswap_core::result::AppResult;
use skillswap_entity::skill::Skill;

/// Repository for catalogue skills.
#[derive(Debug, Clone)]
pub struct SkillRepository {
    pool: PgPool,
}

impl SkillRepository {
    /// Create a new skill repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the whole catalogue ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Skill>> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skills ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list skills", e))
    }

    /// Find a skill by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Skill>> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find skill", e))
    }

    /// Batch-fetch skills by id.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Skill>> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to batch-fetch skills", e)
            })
    }

    /// Find a skill by its exact stored name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Skill>> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find skill by name", e)
            })
    }

    /// Skills whose name matches an escaped `ILIKE` pattern.
    ///
    /// The pattern must use `\` as its escape character.
    pub async fn search_by_name(&self, pattern: &str) -> AppResult<Vec<Skill>> {
        sqlx::query_as::<_, Skill>(
            "SELECT * FROM skills WHERE name ILIKE $1 ESCAPE '\\' ORDER BY name",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search skills", e))
    }

    /// Return the skill named `name`, inserting it if it does not exist yet.
    ///
    /// Concurrent callers racing on the same name both end up with the
    /// single stored row.
    pub async fn find_or_create(&self, name: &str, category: Option<&str>) -> AppResult<Skill> {
        let inserted = sqlx::query_as::<_, Skill>(
            "INSERT INTO skills (name, category) VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT skills_name_key DO NOTHING \
             RETURNING *",
        )
        .bind(name)
        .bind(category)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create skill", e))?;

        match inserted {
            Some(skill) => Ok(skill),
            None => self
                .find_by_name(name)
                .await?
                .ok_or_else(|| AppError::internal(format!("Skill '{name}' vanished after insert"))),
        }
    }
}
