//! News DTOs: keyword search form, headline views, update form.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::api::dto::Flash;
use crate::models::Headline;

pub const KEYWORD_CHARS_MESSAGE: &str =
    "Keyword should not contain the characters '@', '!', or '.'! Take these out and try again.";

/// The external API treats these as query syntax rather than search text.
fn validate_keyword_chars(keyword: &str) -> Result<(), ValidationError> {
    if keyword.contains(['@', '!', '.']) {
        let mut error = ValidationError::new("keyword_chars");
        error.message = Some(Cow::Borrowed(KEYWORD_CHARS_MESSAGE));
        return Err(error);
    }
    Ok(())
}

/// Keyword search form submission.
#[derive(Debug, Deserialize, Validate)]
pub struct KeywordForm {
    #[validate(
        length(min = 1, max = 80, message = "Keyword is required"),
        custom(function = validate_keyword_chars)
    )]
    pub keyword: String,
}

/// Replacement-text form for updating a saved headline.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHeadlineForm {
    #[validate(length(min = 1, message = "The new headline is required"))]
    pub update_article: String,
}

#[derive(Debug, Serialize)]
pub struct HeadlineResponse {
    pub id: i32,
    pub headline: String,
}

impl From<Headline> for HeadlineResponse {
    fn from(headline: Headline) -> Self {
        Self {
            id: headline.id,
            headline: headline.headline,
        }
    }
}

/// The keyword-search page: running total of saved headlines plus an
/// optional notice from the previous submission.
#[derive(Debug, Serialize)]
pub struct NewsPage {
    pub num_news: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<Flash>,
}

/// Every headline saved so far.
#[derive(Debug, Serialize)]
pub struct NewsResultsPage {
    pub num_news: i64,
    pub news: Vec<HeadlineResponse>,
}
