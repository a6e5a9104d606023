//! Feedback domain entities.

pub mod model;
pub mod rating;

pub use model::{CreateFeedback, Feedback};
pub use rating::Rating;
