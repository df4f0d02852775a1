//! News handlers: keyword search, saved results, headline updates.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

use super::redirect_with_flash;
use crate::api::dto::{Flash, KeywordForm, NewsPage, NewsResultsPage, UpdateHeadlineForm};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedForm;

pub const NO_HEADLINES_MESSAGE: &str =
    "There are no recent headlines pertaining to this keyword, try a different keyword!";

/// GET /news - keyword search page with the running headline count.
pub async fn news_page(State(state): State<AppState>) -> AppResult<Json<NewsPage>> {
    let num_news = state.services.news.count().await?;
    Ok(Json(NewsPage {
        num_news,
        flash: None,
    }))
}

/// POST /news - search the external API for the keyword.
///
/// A hit saves the headline and redirects to the results page. A miss
/// stays on the search page with a notice; an unreachable API counts as
/// a miss rather than an error.
pub async fn search_news(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<KeywordForm>,
) -> AppResult<Response> {
    let found = state
        .services
        .news
        .get_or_create_headline(&form.keyword)
        .await?;

    if found.is_none() {
        let num_news = state.services.news.count().await?;
        return Ok(Json(NewsPage {
            num_news,
            flash: Some(Flash::new(NO_HEADLINES_MESSAGE)),
        })
        .into_response());
    }

    Ok(Redirect::to("/news_results").into_response())
}

/// GET /news_results - every headline saved so far.
pub async fn news_results(State(state): State<AppState>) -> AppResult<Json<NewsResultsPage>> {
    let news = state.services.news.list().await?;
    Ok(Json(NewsResultsPage {
        num_news: news.len() as i64,
        news: news.into_iter().map(Into::into).collect(),
    }))
}

#[derive(Debug, Serialize)]
pub struct UpdateHeadlinePage {
    pub headline: String,
}

/// GET /update/{headline} - the update form, echoing the current text.
pub async fn update_headline_page(Path(headline): Path<String>) -> Json<UpdateHeadlinePage> {
    Json(UpdateHeadlinePage { headline })
}

/// POST /update/{headline} - replace the text of a saved headline.
///
/// Matches on current text, so a stale path segment yields 404 instead
/// of silently updating nothing.
pub async fn update_headline(
    State(state): State<AppState>,
    Path(headline): Path<String>,
    ValidatedForm(form): ValidatedForm<UpdateHeadlineForm>,
) -> AppResult<Response> {
    state
        .services
        .news
        .update_by_text(&headline, &form.update_article)
        .await?;

    Ok(redirect_with_flash(
        "/collections",
        format!("Updated the article {headline}"),
    ))
}
