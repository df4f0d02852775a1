//! Source DTOs: the suggestion form and the source list view.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Source;

/// News-source suggestion form submission.
#[derive(Debug, Deserialize, Validate)]
pub struct SourceForm {
    #[validate(length(min = 1, max = 50, message = "Source is required"))]
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct SourceResponse {
    pub id: i32,
    pub source: String,
}

impl From<Source> for SourceResponse {
    fn from(source: Source) -> Self {
        Self {
            id: source.id,
            source: source.source,
        }
    }
}

/// Every suggested source, oldest first.
#[derive(Debug, Serialize)]
pub struct SourcesPage {
    pub all_sources: Vec<SourceResponse>,
}
