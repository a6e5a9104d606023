//! Swap request domain entities.

pub mod model;
pub mod status;

pub use model::{CreateSwapRequest, SwapRequest};
pub use status::SwapStatus;
