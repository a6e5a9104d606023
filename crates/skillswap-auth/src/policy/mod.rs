//! Row-level authorization policy.
//!
//! Each rule is a pure function of the acting user and the row (or the row
//! about to be written). Services call the matching rule before every
//! mutation and on single-row reads. A denied rule surfaces to clients as
//! `403 FORBIDDEN`.

pub mod avatar;
pub mod error;
pub mod feedback;
pub mod profile;
pub mod swap;
pub mod user_skill;

pub use error::PolicyError;

/// Result of evaluating a policy rule.
pub type PolicyResult = Result<(), PolicyError>;
