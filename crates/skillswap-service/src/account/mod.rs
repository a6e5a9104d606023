//! Account lifecycle: register, login, refresh, restore, logout.

pub mod service;

pub use service::{AccountService, AccountView, AuthSession, Registration};
