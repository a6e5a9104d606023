//! Profile page: own profile, other profiles, avatar upload.

pub mod service;

pub use service::ProfileService;
