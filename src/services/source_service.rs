//! Source service: user-suggested news sources with application-level
//! duplicate rejection.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{NewSource, Source};
use crate::repositories::SourceStore;

pub const DUPLICATE_SOURCE_MESSAGE: &str =
    "This source has already been added to the list. Try another source!";

#[derive(Clone)]
pub struct SourceService {
    repo: Arc<dyn SourceStore>,
}

impl SourceService {
    pub fn new(repo: Arc<dyn SourceStore>) -> Self {
        Self { repo }
    }

    /// Adds a source unless the exact same text already exists.
    ///
    /// Duplicate detection is a plain text-equality query, not a database
    /// constraint, so two concurrent submissions of the same text can both
    /// land. That window is accepted.
    pub async fn add(&self, text: &str) -> AppResult<Source> {
        if self.repo.find_by_text(text).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "source".to_string(),
                field: "source".to_string(),
                value: text.to_string(),
            });
        }

        let source = self
            .repo
            .create(NewSource {
                source: text.to_string(),
            })
            .await?;
        tracing::info!(source_id = source.id, "added news source");
        Ok(source)
    }

    pub async fn list(&self) -> AppResult<Vec<Source>> {
        self.repo.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use jiff_diesel::DateTime;

    use super::*;

    /// In-memory sources table.
    #[derive(Default)]
    struct FakeSourceStore {
        sources: Mutex<Vec<Source>>,
    }

    #[async_trait]
    impl SourceStore for FakeSourceStore {
        async fn create(&self, new_source: NewSource) -> Result<Source, AppError> {
            let mut sources = self.sources.lock().unwrap();
            let source = Source {
                id: sources.len() as i32 + 1,
                source: new_source.source,
                created_at: DateTime::from(jiff::civil::DateTime::default()),
            };
            sources.push(source.clone());
            Ok(source)
        }

        async fn find_by_text(&self, text: &str) -> Result<Option<Source>, AppError> {
            Ok(self
                .sources
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.source == text)
                .cloned())
        }

        async fn list_all(&self) -> Result<Vec<Source>, AppError> {
            Ok(self.sources.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn the_same_text_twice_is_rejected_without_a_second_row() {
        let store = Arc::new(FakeSourceStore::default());
        let service = SourceService::new(store.clone());

        service.add("The Atlantic").await.unwrap();
        let result = service.add("The Atlantic").await;

        assert!(matches!(result, Err(AppError::Duplicate { .. })));
        assert_eq!(store.sources.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn different_text_is_accepted() {
        let service = SourceService::new(Arc::new(FakeSourceStore::default()));

        service.add("The Atlantic").await.unwrap();
        let second = service.add("the atlantic").await.unwrap();

        // Comparison is exact; case variants are distinct sources.
        assert_eq!(second.id, 2);
    }
}
