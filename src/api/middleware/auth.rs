//! Session authentication middleware.
//!
//! Resolves the session cookie against the in-memory session store and
//! exposes the logged-in user to handlers via request extensions.

use axum::{
    extract::{Request, State},
    http::Uri,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::sessions::SessionData;
use crate::state::AppState;

/// Extension type for the authenticated user.
///
/// Added to request extensions after a session resolves, extracted in
/// handlers with `Extension<AuthUser>`.
#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
    pub email: String,
}

impl From<SessionData> for AuthUser {
    fn from(session: SessionData) -> Self {
        Self {
            user_id: session.user_id,
            username: session.username,
            email: session.email,
        }
    }
}

/// Builds the login redirect for an anonymous request, carrying the full
/// original path and query, percent-encoded, in the `next` parameter.
fn login_redirect_target(uri: &Uri) -> String {
    let original = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    format!(
        "/login?next={}",
        utf8_percent_encode(original, NON_ALPHANUMERIC)
    )
}

/// Login-required middleware.
///
/// Anonymous requests are redirected to the login page with the original
/// path carried in the `next` query parameter, so a successful login can
/// return the user to where they were headed.
pub async fn session_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = state
        .sessions
        .token_from_headers(request.headers())
        .and_then(|token| state.sessions.resolve(&token));

    let Some(session) = session else {
        return Redirect::to(&login_redirect_target(request.uri())).into_response();
    };

    request.extensions_mut().insert(AuthUser::from(session));
    next.run(request).await
}

/// Like `session_auth`, but anonymous requests pass through without the
/// extension. For pages that merely personalize when logged in.
pub async fn optional_session_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(session) = state
        .sessions
        .token_from_headers(request.headers())
        .and_then(|token| state.sessions.resolve(&token))
    {
        request.extensions_mut().insert(AuthUser::from(session));
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_target_keeps_the_query_string() {
        let uri = Uri::from_static("/create_collection?draft=1");
        assert_eq!(
            login_redirect_target(&uri),
            "/login?next=%2Fcreate%5Fcollection%3Fdraft%3D1"
        );
    }

    #[test]
    fn redirect_target_encodes_the_bare_path() {
        let uri = Uri::from_static("/sources");
        assert_eq!(login_redirect_target(&uri), "/login?next=%2Fsources");
    }
}
