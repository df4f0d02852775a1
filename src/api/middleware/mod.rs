//! Middleware components for request processing.
//!
//! Covers logging, request ID tracking, error response conversion, and
//! session authentication.

mod auth;
mod error_handler;
mod logging;
mod request_id;

pub use auth::{AuthUser, optional_session_auth, session_auth};
pub use logging::logging_middleware;
pub use request_id::{RequestId, request_id_middleware};
