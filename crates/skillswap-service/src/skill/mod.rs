//! Skills page: catalogue, my skills, add and remove.

pub mod service;

pub use service::{AddSkill, SkillService};
