//! Skill catalogue and per-user skill entities.

pub mod model;
pub mod skill_type;
pub mod user_skill;

pub use model::Skill;
pub use skill_type::SkillType;
pub use user_skill::UserSkill;
