//! News service: keyword search against the external API and headline
//! bookkeeping.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::external::headlines::HeadlineProvider;
use crate::models::{Headline, NewHeadline};
use crate::repositories::HeadlineStore;

#[derive(Clone)]
pub struct NewsService {
    repo: Arc<dyn HeadlineStore>,
    provider: Arc<dyn HeadlineProvider>,
}

impl NewsService {
    pub fn new(repo: Arc<dyn HeadlineStore>, provider: Arc<dyn HeadlineProvider>) -> Self {
        Self { repo, provider }
    }

    /// Searches the external API for `keyword` and persists the first
    /// returned title.
    ///
    /// Every hit inserts a fresh row, even when identical text already
    /// exists; repeated or concurrent searches are allowed to produce
    /// duplicates. `None` means the API had nothing (or failed).
    pub async fn get_or_create_headline(&self, keyword: &str) -> AppResult<Option<Headline>> {
        let Some(title) = self.provider.fetch_top_headline(keyword).await? else {
            return Ok(None);
        };

        let headline = self.repo.create(NewHeadline { headline: title }).await?;
        tracing::info!(keyword, headline_id = headline.id, "saved new headline");
        Ok(Some(headline))
    }

    pub async fn list(&self) -> AppResult<Vec<Headline>> {
        self.repo.list_all().await
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.repo.count().await
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Headline>> {
        self.repo.find_by_ids(ids).await
    }

    /// Overwrites the first headline whose text matches `current_text`.
    ///
    /// Headline text is not unique, so this is a first-match update; a
    /// missing match is a structured NotFound rather than a crash.
    pub async fn update_by_text(&self, current_text: &str, new_text: &str) -> AppResult<Headline> {
        let headline = self
            .repo
            .find_first_by_text(current_text)
            .await?
            .ok_or_else(|| AppError::not_found("headline", "text", current_text))?;

        self.repo.update_text(headline.id, new_text).await
    }
}
