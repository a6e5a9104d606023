//! # skillswap-auth
//!
//! Authentication and authorization for SkillSwap.
//!
//! ## Modules
//!
//! - `jwt`: token creation and validation
//! - `password`: Argon2id password hashing and policy enforcement
//! - `session`: in-memory session revocation (logout)
//! - `policy`: row-level authorization rules evaluated before every mutation

pub mod jwt;
pub mod password;
pub mod policy;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::PolicyError;
pub use session::SessionRevocations;
