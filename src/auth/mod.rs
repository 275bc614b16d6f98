//! Credential handling for anonboard.
//!
//! Delete passwords are per-item throwaway secrets: hashed once when a
//! thread or reply is created, verified before any delete is honored.

mod password;

pub use password::{hash_password, verify_password, PasswordError};
