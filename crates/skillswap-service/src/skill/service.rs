//! Skill catalogue and per-user skill management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use skillswap_auth::policy;
use skillswap_core::error::AppError;
use skillswap_database::repositories::{SkillRepository, UserSkillRepository};
use skillswap_entity::skill::{Skill, SkillType, UserSkill};

use crate::context::RequestContext;
use crate::join::{self, Lookup};
use crate::views::{MySkills, UserSkillView, project_user_skill};

/// Maximum skill name length in characters.
pub const MAX_SKILL_NAME_LEN: usize = 100;

/// Request to add a skill to the acting user's list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSkill {
    /// Skill name; created in the catalogue when unknown.
    pub name: String,
    /// Category used only when the skill is created.
    pub category: Option<String>,
    /// Offered or wanted.
    pub skill_type: SkillType,
}

/// Skill catalogue and user skill operations.
#[derive(Debug, Clone)]
pub struct SkillService {
    /// Catalogue repository.
    skill_repo: Arc<SkillRepository>,
    /// User skill repository.
    user_skill_repo: Arc<UserSkillRepository>,
}

impl SkillService {
    /// Creates a new skill service.
    pub fn new(skill_repo: Arc<SkillRepository>, user_skill_repo: Arc<UserSkillRepository>) -> Self {
        Self {
            skill_repo,
            user_skill_repo,
        }
    }

    /// The whole catalogue ordered by name.
    pub async fn catalogue(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.find_all().await
    }

    /// The acting user's skills split into offered and wanted.
    pub async fn my_skills(&self, ctx: &RequestContext) -> Result<MySkills, AppError> {
        let rows = self.user_skill_repo.find_by_user(ctx.user_id).await?;
        let skill_ids = join::distinct_ids(&rows, |r| [r.skill_id]);
        let skill_repo = self.skill_repo.clone();
        let skills: Lookup<Skill> = join::batch_join(skill_ids, |ids| async move {
            skill_repo.find_by_ids(&ids).await
        })
        .await?;

        Ok(split_by_type(&rows, &skills))
    }

    /// Add a skill to the acting user's list, creating it if unknown.
    pub async fn add(&self, ctx: &RequestContext, req: AddSkill) -> Result<UserSkillView, AppError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Skill name is required"));
        }
        if name.chars().count() > MAX_SKILL_NAME_LEN {
            return Err(AppError::validation(format!(
                "Skill name must be at most {MAX_SKILL_NAME_LEN} characters"
            )));
        }
        let category = req
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        policy::user_skill::can_modify(ctx.user_id, ctx.user_id)?;

        let skill = match self.skill_repo.find_by_name(name).await? {
            Some(skill) => skill,
            None => {
                let skill = self.skill_repo.find_or_create(name, category).await?;
                info!(user_id = %ctx.user_id, skill_id = %skill.id, name = %skill.name, "Skill created");
                skill
            }
        };

        let row = self
            .user_skill_repo
            .create(ctx.user_id, skill.id, req.skill_type)
            .await?;

        info!(
            user_id = %ctx.user_id,
            skill_id = %skill.id,
            skill_type = %req.skill_type,
            "Skill added"
        );

        let skills = Lookup::from_rows([skill]);
        project_user_skill(&row, &skills)
            .ok_or_else(|| AppError::internal("Added skill could not be resolved"))
    }

    /// Remove one of the acting user's skills.
    pub async fn remove(&self, ctx: &RequestContext, user_skill_id: Uuid) -> Result<(), AppError> {
        let row = self
            .user_skill_repo
            .find_by_id(user_skill_id)
            .await?
            .ok_or_else(|| AppError::not_found("Skill not found in your list"))?;
        policy::user_skill::can_modify(ctx.user_id, row.user_id)?;

        if !self.user_skill_repo.delete(row.id, ctx.user_id).await? {
            return Err(AppError::not_found("Skill not found in your list"));
        }

        info!(user_id = %ctx.user_id, user_skill_id = %row.id, "Skill removed");
        Ok(())
    }
}

/// Split user skill rows into offered and wanted views.
pub fn split_by_type(rows: &[UserSkill], skills: &Lookup<Skill>) -> MySkills {
    let mut out = MySkills::default();
    for row in rows {
        let Some(view) = project_user_skill(row, skills) else {
            continue;
        };
        match row.skill_type {
            SkillType::Offered => out.offered.push(view),
            SkillType::Wanted => out.wanted.push(view),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn skill(name: &str) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: None,
            is_approved: true,
            created_at: Utc::now(),
        }
    }

    fn row(user: Uuid, skill: &Skill, skill_type: SkillType) -> UserSkill {
        UserSkill {
            id: Uuid::new_v4(),
            user_id: user,
            skill_id: skill.id,
            skill_type,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_split_by_type() {
        let me = Uuid::new_v4();
        let (guitar, spanish) = (skill("Guitar"), skill("Spanish"));
        let rows = vec![
            row(me, &guitar, SkillType::Offered),
            row(me, &spanish, SkillType::Wanted),
            row(me, &guitar, SkillType::Wanted),
        ];
        let lookup = Lookup::from_rows([guitar.clone(), spanish.clone()]);

        let split = split_by_type(&rows, &lookup);
        assert_eq!(split.offered.len(), 1);
        assert_eq!(split.offered[0].skill.name, "Guitar");
        let wanted: Vec<_> = split.wanted.iter().map(|v| v.skill.name.as_str()).collect();
        assert_eq!(wanted, vec!["Spanish", "Guitar"]);
    }

    #[test]
    fn test_unresolved_rows_dropped() {
        let me = Uuid::new_v4();
        let ghost = skill("Ghost");
        let rows = vec![row(me, &ghost, SkillType::Offered)];
        let split = split_by_type(&rows, &Lookup::empty());
        assert!(split.offered.is_empty());
    }
}
