//! Feedback page: pending reviews, received and given feedback, submit.

pub mod service;

pub use service::{FeedbackService, NewFeedback};
