//! # skillswap-core
//!
//! Core crate for SkillSwap. Contains configuration schemas, the storage
//! provider trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other SkillSwap crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
