//! Request handlers for the application routes.

pub mod auth;
pub mod collections;
pub mod home;
pub mod news;
pub mod sources;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::Flash;

/// 303 redirect carrying a one-shot notice in the body.
///
/// The original site flashed these messages into the target page; here
/// the client reads the flash from the redirect response instead.
pub(crate) fn redirect_with_flash(location: &str, message: impl Into<String>) -> Response {
    (
        StatusCode::SEE_OTHER,
        [(header::LOCATION, location)],
        Json(Flash::new(message)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_carries_location_and_303() {
        let response = redirect_with_flash("/collections", "Deleted collection old");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/collections"
        );
    }
}
