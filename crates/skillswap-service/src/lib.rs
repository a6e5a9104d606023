//! # skillswap-service
//!
//! Business logic service layer for SkillSwap. Each service orchestrates
//! repositories, storage and authorization policy to implement one page's
//! worth of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod context;
pub mod feedback;
pub mod join;
pub mod profile;
pub mod search;
pub mod skill;
pub mod swap;
pub mod views;

pub use account::AccountService;
pub use context::RequestContext;
pub use feedback::FeedbackService;
pub use profile::ProfileService;
pub use search::SearchService;
pub use skill::SkillService;
pub use swap::SwapService;
