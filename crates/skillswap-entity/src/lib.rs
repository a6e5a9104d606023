//! # skillswap-entity
//!
//! Domain entity models for SkillSwap. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod feedback;
pub mod profile;
pub mod skill;
pub mod swap;
pub mod user;
