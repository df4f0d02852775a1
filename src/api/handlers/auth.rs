//! Authentication handlers: register, login, logout.

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::redirect_with_flash;
use crate::api::dto::{LoginForm, RegisterForm};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedForm;

#[derive(Debug, Deserialize)]
pub struct LoginPageQuery {
    pub next: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginPage {
    /// Echoed back so the login form can post it along.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// GET /login - login page.
pub async fn login_page(Query(query): Query<LoginPageQuery>) -> Json<LoginPage> {
    Json(LoginPage { next: query.next })
}

/// POST /login - authenticate and start a session.
///
/// On success, sets the session cookie and redirects to the page the
/// user originally asked for, or home. Bad credentials surface as 401
/// with a deliberately vague message.
pub async fn login(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<LoginForm>,
) -> AppResult<Response> {
    let user = state
        .services
        .users
        .authenticate(&form.email, &form.password)
        .await?;

    let (token, max_age_secs) = state.sessions.create(&user, form.remember_me);
    let cookie = state.sessions.login_cookie(&token, max_age_secs);

    // Only same-site paths are honored as redirect targets.
    let target = form
        .next
        .filter(|n| n.starts_with('/') && !n.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());

    tracing::info!(user_id = user.id, "user logged in");
    Ok((
        StatusCode::SEE_OTHER,
        [
            (header::LOCATION, target),
            (header::SET_COOKIE, cookie),
        ],
    )
        .into_response())
}

/// GET /register - registration page.
pub async fn register_page() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "fields": ["email", "username", "password", "password2"],
    }))
}

/// POST /register - create an account.
pub async fn register(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<RegisterForm>,
) -> AppResult<Response> {
    let user = state
        .services
        .users
        .register(&form.username, &form.email, &form.password)
        .await?;

    tracing::info!(user_id = user.id, "account created");
    Ok(redirect_with_flash(
        "/login",
        "Account created! You can now log in.",
    ))
}

/// GET /logout - end the session.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = state.sessions.token_from_headers(&headers) {
        state.sessions.revoke(&token);
    }

    let clear_cookie = state.sessions.logout_cookie();
    let mut response = redirect_with_flash("/", "You have now been logged out.");
    if let Ok(value) = clear_cookie.parse() {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}
