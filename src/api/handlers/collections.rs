//! Collection handlers: creation, listing, detail view, deletion.

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use super::redirect_with_flash;
use crate::api::dto::{
    ArticleChoice, CollectionDetailPage, CollectionsPage, CreateCollectionForm,
    CreateCollectionPage,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedForm;

/// GET /create_collection - creation form with every saved headline as
/// a selectable choice.
pub async fn create_collection_page(
    State(state): State<AppState>,
) -> AppResult<Json<CreateCollectionPage>> {
    let headlines = state.services.news.list().await?;
    Ok(Json(CreateCollectionPage {
        choices: headlines
            .into_iter()
            .map(|h| ArticleChoice {
                id: h.id,
                headline: h.headline,
            })
            .collect(),
    }))
}

/// POST /create_collection - create (or find) a collection for the
/// current user and attach the selected headlines.
///
/// An existing name for this user short-circuits; the selection is only
/// honored on first creation.
pub async fn create_collection(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidatedForm(form): ValidatedForm<CreateCollectionForm>,
) -> AppResult<Response> {
    // Stale ids in the selection drop out here instead of failing the
    // insert on a foreign key.
    let headlines = state
        .services
        .news
        .find_by_ids(&form.selected_ids())
        .await?;
    let headline_ids: Vec<i32> = headlines.iter().map(|h| h.id).collect();

    state
        .services
        .collections
        .get_or_create(user.user_id, &form.name, &headline_ids)
        .await?;

    Ok(Redirect::to("/collections").into_response())
}

/// GET /collections - the current user's collections.
pub async fn collections_page(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> AppResult<Json<CollectionsPage>> {
    let collections = state.services.collections.list_for_user(user.user_id).await?;
    Ok(Json(CollectionsPage {
        collections: collections.into_iter().map(Into::into).collect(),
    }))
}

/// GET /collection/{id} - one collection and its headlines.
pub async fn view_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CollectionDetailPage>> {
    let (collection, headlines) = state.services.collections.get_with_headlines(id).await?;
    Ok(Json(CollectionDetailPage {
        collection: collection.into(),
        headlines: headlines.into_iter().map(Into::into).collect(),
    }))
}

/// POST /delete/{name} - delete the first collection with this name.
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    state.services.collections.delete_by_name(&name).await?;
    Ok(redirect_with_flash(
        "/collections",
        format!("Deleted collection {name}"),
    ))
}
