//! Swap requests page: send, list, decide, delete.

pub mod service;

pub use service::{NewSwapRequest, SwapService};
