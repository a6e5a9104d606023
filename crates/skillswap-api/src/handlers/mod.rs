//! HTTP request handlers, one module per page.

pub mod auth;
pub mod avatar;
pub mod feedback;
pub mod health;
pub mod profile;
pub mod search;
pub mod skill;
pub mod swap;
