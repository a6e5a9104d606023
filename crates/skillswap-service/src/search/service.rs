//! Skill-based user search.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use skillswap_core::error::AppError;
use skillswap_database::repositories::{ProfileRepository, SkillRepository, UserSkillRepository};
use skillswap_entity::profile::Profile;
use skillswap_entity::skill::{Skill, SkillType, UserSkill};

use super::scope::SearchScope;
use crate::context::RequestContext;
use crate::join::{self, Lookup};
use crate::views::{ProfileSummary, SearchResult, SkillRef};

/// Finds users by the skills they hold.
#[derive(Debug, Clone)]
pub struct SearchService {
    /// Catalogue repository.
    skill_repo: Arc<SkillRepository>,
    /// User skill repository.
    user_skill_repo: Arc<UserSkillRepository>,
    /// Profile repository.
    profile_repo: Arc<ProfileRepository>,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(
        skill_repo: Arc<SkillRepository>,
        user_skill_repo: Arc<UserSkillRepository>,
        profile_repo: Arc<ProfileRepository>,
    ) -> Self {
        Self {
            skill_repo,
            user_skill_repo,
            profile_repo,
        }
    }

    /// Search for public users holding a skill whose name contains `term`.
    ///
    /// Stages short-circuit to an empty result as soon as one of them
    /// yields nothing. The searching user is never returned.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        term: &str,
        scope: SearchScope,
    ) -> Result<Vec<SearchResult>, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let matching = self.skill_repo.search_by_name(&like_pattern(term)).await?;
        if matching.is_empty() {
            debug!(term, "No skills match search term");
            return Ok(Vec::new());
        }

        let skill_ids: Vec<Uuid> = matching.iter().map(|s| s.id).collect();
        let user_ids = self
            .user_skill_repo
            .find_public_holders(&skill_ids, scope.skill_types(), ctx.user_id)
            .await?;
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let profiles = self
            .profile_repo
            .find_visible_by_user_ids(&user_ids, ctx.user_id)
            .await?;
        let profiles: Vec<Profile> = profiles
            .into_iter()
            .filter(|p| p.is_public && p.user_id != ctx.user_id)
            .collect();
        if profiles.is_empty() {
            return Ok(Vec::new());
        }

        let holder_ids: Vec<Uuid> = profiles.iter().map(|p| p.user_id).collect();
        let offered = self
            .user_skill_repo
            .find_by_users_and_type(&holder_ids, SkillType::Offered)
            .await?;

        let offered_skill_ids = join::distinct_ids(&offered, |r| [r.skill_id]);
        let skill_repo = self.skill_repo.clone();
        let skills: Lookup<Skill> = join::batch_join(offered_skill_ids, |ids| async move {
            skill_repo.find_by_ids(&ids).await
        })
        .await?;

        let results = assemble_results(profiles, &offered, &skills);
        debug!(term, scope = ?scope, results = results.len(), "Search completed");
        Ok(results)
    }
}

/// Build an `ILIKE` substring pattern, escaping `%`, `_` and `\` in `term`.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// One result per profile, each with its deduplicated offered skills.
///
/// Results are ordered by display name, then user id.
pub fn assemble_results(
    profiles: Vec<Profile>,
    offered: &[UserSkill],
    skills: &Lookup<Skill>,
) -> Vec<SearchResult> {
    let mut by_user: HashMap<Uuid, Vec<SkillRef>> = HashMap::new();
    let mut seen: HashSet<(Uuid, Uuid)> = HashSet::new();
    for row in offered {
        if row.skill_type != SkillType::Offered || !seen.insert((row.user_id, row.skill_id)) {
            continue;
        }
        if let Some(skill) = skills.get(&row.skill_id) {
            by_user
                .entry(row.user_id)
                .or_default()
                .push(SkillRef::from(skill));
        }
    }

    let mut results: Vec<SearchResult> = profiles
        .iter()
        .map(|p| SearchResult {
            profile: ProfileSummary::from(p),
            availability: p.availability.clone(),
            offered_skills: by_user.remove(&p.user_id).unwrap_or_default(),
        })
        .collect();
    results.sort_by(|a, b| {
        a.profile
            .name
            .cmp(&b.profile.name)
            .then(a.profile.user_id.cmp(&b.profile.user_id))
    });
    results
}
