//! Collection DTOs: creation form with article selection, list and
//! detail views.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::api::dto::HeadlineResponse;
use crate::models::Collection;

pub const COLLECTION_NAME_MESSAGE: &str =
    "Collection name should only be one word - take out space and try again.";

fn validate_single_word(name: &str) -> Result<(), ValidationError> {
    if name.contains(' ') {
        let mut error = ValidationError::new("single_word");
        error.message = Some(Cow::Borrowed(COLLECTION_NAME_MESSAGE));
        return Err(error);
    }
    Ok(())
}

/// Collection creation form submission.
///
/// `selected_articles` is a comma-separated list of headline ids, the
/// urlencoded stand-in for a multi-select field. Unparseable entries are
/// skipped rather than rejected, matching how a select ignores stale
/// options.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCollectionForm {
    #[validate(
        length(min = 1, max = 50, message = "Collection Name is required"),
        custom(function = validate_single_word)
    )]
    pub name: String,

    pub selected_articles: Option<String>,
}

impl CreateCollectionForm {
    /// Parses the selection into headline ids.
    pub fn selected_ids(&self) -> Vec<i32> {
        self.selected_articles
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub id: i32,
    pub name: String,
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id,
            name: collection.name,
        }
    }
}

/// An article available for selection on the creation page.
#[derive(Debug, Serialize)]
pub struct ArticleChoice {
    pub id: i32,
    pub headline: String,
}

/// The creation page: every saved headline as a selectable choice.
#[derive(Debug, Serialize)]
pub struct CreateCollectionPage {
    pub choices: Vec<ArticleChoice>,
}

/// The current user's collections.
#[derive(Debug, Serialize)]
pub struct CollectionsPage {
    pub collections: Vec<CollectionResponse>,
}

/// One collection with its headlines in insertion order.
#[derive(Debug, Serialize)]
pub struct CollectionDetailPage {
    pub collection: CollectionResponse,
    pub headlines: Vec<HeadlineResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, selected: Option<&str>) -> CreateCollectionForm {
        CreateCollectionForm {
            name: name.to_string(),
            selected_articles: selected.map(str::to_string),
        }
    }

    #[test]
    fn multi_word_name_is_rejected() {
        let errors = form("my news", None).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn single_word_name_is_accepted() {
        assert!(form("politics", Some("1,2,3")).validate().is_ok());
    }

    #[test]
    fn selected_ids_parse_and_skip_garbage() {
        assert_eq!(form("n", Some("3, 7,x,12")).selected_ids(), vec![3, 7, 12]);
        assert!(form("n", None).selected_ids().is_empty());
        assert!(form("n", Some("")).selected_ids().is_empty());
    }
}
