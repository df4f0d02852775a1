//! Shared utilities: password hashing and validated form extraction.

pub mod password;
pub mod validate;
