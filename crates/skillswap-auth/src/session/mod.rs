//! Session teardown.

pub mod revocation;

pub use revocation::SessionRevocations;
