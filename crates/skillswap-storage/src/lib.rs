//! # skillswap-storage
//!
//! Object storage for SkillSwap: a local filesystem provider and the
//! avatar bucket built on top of it.

pub mod avatar;
pub mod providers;

pub use avatar::{AvatarFormat, AvatarStore};
pub use providers::LocalStorageProvider;
