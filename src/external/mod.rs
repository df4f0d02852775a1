//! Integrations with external services.

pub mod client;
pub mod headlines;
