//! Offered/wanted tag on a user skill.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a user offers or wants a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    /// The user can teach or share this skill.
    Offered,
    /// The user wishes to learn this skill.
    Wanted,
}

impl SkillType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offered => "offered",
            Self::Wanted => "wanted",
        }
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillType {
    type Err = skillswap_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "offered" => Ok(Self::Offered),
            "wanted" => Ok(Self::Wanted),
            _ => Err(skillswap_core::AppError::validation(format!(
                "Invalid skill type: '{s}'. Expected one of: offered, wanted"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("offered".parse::<SkillType>().unwrap(), SkillType::Offered);
        assert_eq!("WANTED".parse::<SkillType>().unwrap(), SkillType::Wanted);
        assert!("both".parse::<SkillType>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SkillType::Wanted).unwrap();
        assert_eq!(json, "\"wanted\"");
    }
}
