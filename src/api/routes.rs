//! Router configuration for the application.
//!
//! Centralizes route registration and middleware layering.

use axum::{Router, middleware, routing::get};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

use crate::api::handlers::{auth, collections, home, news, sources};
use crate::api::middleware::{
    logging_middleware, optional_session_auth, request_id_middleware, session_auth,
};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// Routes split into two groups: public pages anyone can reach, and
/// pages behind the login guard. The guard redirects anonymous visitors
/// to `/login?next=...` rather than returning 401, since these are
/// user-facing pages.
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(home::home))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            optional_session_auth,
        ))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/news", get(news::news_page).post(news::search_news))
        .route("/news_results", get(news::news_results))
        .route(
            "/update/{headline}",
            get(news::update_headline_page).post(news::update_headline),
        )
        .route("/collection/{id}", get(collections::view_collection));

    let guarded = Router::new()
        .route("/logout", get(auth::logout))
        .route("/sources", get(sources::sources_page).post(sources::add_source))
        .route(
            "/create_collection",
            get(collections::create_collection_page).post(collections::create_collection),
        )
        .route("/collections", get(collections::collections_page))
        .route(
            "/delete/{name}",
            get(collections::delete_collection).post(collections::delete_collection),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), session_auth));

    Router::new()
        .merge(public)
        .merge(guarded)
        .fallback(home::not_found)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
