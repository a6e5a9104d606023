//! Which skill lists a search term is matched against.

use serde::{Deserialize, Serialize};

use skillswap_entity::skill::SkillType;

/// Skill lists a search matches against.
///
/// Results always display the matching user's offered skills regardless of
/// scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Users offering a matching skill.
    #[default]
    Offered,
    /// Users wanting a matching skill.
    Wanted,
    /// Users offering or wanting a matching skill.
    Any,
}

impl SearchScope {
    /// Skill types matched by this scope.
    pub fn skill_types(&self) -> &'static [SkillType] {
        match self {
            Self::Offered => &[SkillType::Offered],
            Self::Wanted => &[SkillType::Wanted],
            Self::Any => &[SkillType::Offered, SkillType::Wanted],
        }
    }
}
