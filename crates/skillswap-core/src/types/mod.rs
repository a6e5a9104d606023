//! Core type definitions used across the SkillSwap workspace.

pub mod response;

pub use response::ApiErrorResponse;
