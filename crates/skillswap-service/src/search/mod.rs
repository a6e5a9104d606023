//! Search page: find counterparties by skill name.

pub mod scope;
pub mod service;

pub use scope::SearchScope;
pub use service::SearchService;
