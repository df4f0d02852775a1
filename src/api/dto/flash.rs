//! Flash message DTO.
//!
//! Redirecting endpoints attach a one-shot notice to the response body so
//! the client can surface it on the target page.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Flash {
    pub message: String,
}

impl Flash {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
