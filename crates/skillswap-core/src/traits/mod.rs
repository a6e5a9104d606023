//! Core traits defined in `skillswap-core` and implemented by other crates.

pub mod storage;

pub use storage::StorageProvider;
