//! Repository implementations for all SkillSwap entities.

pub mod feedback;
pub mod profile;
pub mod skill;
pub mod swap_request;
pub mod user;
pub mod user_skill;

pub use feedback::FeedbackRepository;
pub use profile::ProfileRepository;
pub use skill::SkillRepository;
pub use swap_request::SwapRequestRepository;
pub use user::UserRepository;
pub use user_skill::UserSkillRepository;
