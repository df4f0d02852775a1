//! Source handlers: the suggestion form and the shared source list.

use axum::{Json, extract::State, response::Response};

use super::redirect_with_flash;
use crate::api::dto::{SourceForm, SourcesPage};
use crate::error::{AppError, AppResult};
use crate::services::DUPLICATE_SOURCE_MESSAGE;
use crate::state::AppState;
use crate::utils::validate::ValidatedForm;

/// GET /sources - every suggested source.
pub async fn sources_page(State(state): State<AppState>) -> AppResult<Json<SourcesPage>> {
    let sources = state.services.sources.list().await?;
    Ok(Json(SourcesPage {
        all_sources: sources.into_iter().map(Into::into).collect(),
    }))
}

/// POST /sources - suggest a source.
///
/// Both outcomes land back on the source list; only the notice differs.
pub async fn add_source(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<SourceForm>,
) -> AppResult<Response> {
    match state.services.sources.add(&form.source).await {
        Ok(_) => Ok(redirect_with_flash("/sources", "Source successfully saved!")),
        Err(AppError::Duplicate { .. }) => {
            Ok(redirect_with_flash("/sources", DUPLICATE_SOURCE_MESSAGE))
        }
        Err(other) => Err(other),
    }
}
