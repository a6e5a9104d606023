//! # skillswap-api
//!
//! HTTP API layer for SkillSwap built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, request logging),
//! extractors, DTOs and application wiring.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use state::AppState;
