//! Home page and the 404 fallback.

use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::dto::ErrorResponse;
use crate::api::middleware::AuthUser;

#[derive(Debug, Serialize)]
pub(crate) struct HomePage {
    title: &'static str,
    description: &'static str,
    logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
}

/// GET / - landing page.
///
/// Anonymous visitors see the pitch; logged-in users see their name.
pub async fn home(user: Option<Extension<AuthUser>>) -> Json<HomePage> {
    let username = user.map(|Extension(u)| u.username);
    Json(HomePage {
        title: "Newsclip",
        description: "Search recent headlines by keyword, save the ones you like, \
                      and organize them into collections.",
        logged_in: username.is_some(),
        username,
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("NOT_FOUND", "Page not found")),
    )
        .into_response()
}
