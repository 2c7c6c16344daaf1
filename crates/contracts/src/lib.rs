//! Shared types and the store filtering core of the admin dashboard.
//!
//! Nothing in this crate touches the browser, so every operation can be
//! exercised with plain `cargo test -p contracts`.

pub mod domain;
pub mod shared;
