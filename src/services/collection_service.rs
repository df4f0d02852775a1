//! Collection service: named, user-owned groupings of saved headlines.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Collection, Headline, NewCollection};
use crate::repositories::CollectionStore;

/// The outcome of a get-or-create submission, so the handler can pick
/// the right flash message.
#[derive(Debug)]
pub enum CollectionOutcome {
    Created(Collection),
    AlreadyExists(Collection),
}

#[derive(Clone)]
pub struct CollectionService {
    repo: Arc<dyn CollectionStore>,
}

impl CollectionService {
    pub fn new(repo: Arc<dyn CollectionStore>) -> Self {
        Self { repo }
    }

    /// Get-or-create keyed on (name, owner).
    ///
    /// When a collection of that name already exists for the user, the
    /// submitted headline selection is ignored and the existing row is
    /// returned untouched.
    pub async fn get_or_create(
        &self,
        owner_id: i32,
        name: &str,
        headline_ids: &[i32],
    ) -> AppResult<CollectionOutcome> {
        if let Some(existing) = self.repo.find_by_name_and_user(name, owner_id).await? {
            return Ok(CollectionOutcome::AlreadyExists(existing));
        }

        let collection = self
            .repo
            .create_with_headlines(
                NewCollection {
                    name: name.to_string(),
                    user_id: owner_id,
                },
                headline_ids,
            )
            .await?;
        tracing::info!(
            collection_id = collection.id,
            owner_id,
            headlines = headline_ids.len(),
            "created collection"
        );
        Ok(CollectionOutcome::Created(collection))
    }

    pub async fn list_for_user(&self, owner_id: i32) -> AppResult<Vec<Collection>> {
        self.repo.list_by_user(owner_id).await
    }

    /// A collection and its headlines in insertion order, or a structured
    /// NotFound when the id is stale.
    pub async fn get_with_headlines(
        &self,
        collection_id: i32,
    ) -> AppResult<(Collection, Vec<Headline>)> {
        let collection = self
            .repo
            .find_by_id(collection_id)
            .await?
            .ok_or_else(|| AppError::not_found("collection", "id", collection_id))?;

        let headlines = self.repo.headlines_for(collection.id).await?;
        Ok((collection, headlines))
    }

    /// Deletes the first collection matching `name`, regardless of owner.
    /// Names are only scoped per user at creation time, so a name can
    /// resolve to another user's collection here.
    pub async fn delete_by_name(&self, name: &str) -> AppResult<Collection> {
        let collection = self
            .repo
            .find_first_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("collection", "name", name))?;

        self.repo.delete(collection.id).await?;
        tracing::info!(collection_id = collection.id, "deleted collection");
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use jiff_diesel::DateTime;

    use super::*;

    /// In-memory rendition of the collection tables: headline rows,
    /// collection rows, and the association rows between them.
    #[derive(Default)]
    struct FakeCollectionStore {
        state: Mutex<Tables>,
    }

    #[derive(Default)]
    struct Tables {
        collections: Vec<Collection>,
        headlines: Vec<Headline>,
        // (news_id, collection_id)
        associations: Vec<(i32, i32)>,
    }

    fn now() -> DateTime {
        DateTime::from(jiff::civil::DateTime::default())
    }

    impl FakeCollectionStore {
        fn with_headlines(titles: &[&str]) -> Self {
            let store = Self::default();
            {
                let mut tables = store.state.lock().unwrap();
                for (i, title) in titles.iter().enumerate() {
                    tables.headlines.push(Headline {
                        id: i as i32 + 1,
                        headline: title.to_string(),
                        created_at: now(),
                    });
                }
            }
            store
        }

        fn association_rows(&self) -> Vec<(i32, i32)> {
            self.state.lock().unwrap().associations.clone()
        }

        fn headline_count(&self) -> usize {
            self.state.lock().unwrap().headlines.len()
        }

        fn collection_count(&self) -> usize {
            self.state.lock().unwrap().collections.len()
        }
    }

    #[async_trait]
    impl CollectionStore for FakeCollectionStore {
        async fn create_with_headlines(
            &self,
            new_collection: NewCollection,
            headline_ids: &[i32],
        ) -> Result<Collection, AppError> {
            let mut tables = self.state.lock().unwrap();
            let collection = Collection {
                id: tables.collections.len() as i32 + 1,
                name: new_collection.name,
                user_id: new_collection.user_id,
                created_at: now(),
            };
            for &news_id in headline_ids {
                tables.associations.push((news_id, collection.id));
            }
            tables.collections.push(collection.clone());
            Ok(collection)
        }

        async fn find_by_name_and_user(
            &self,
            collection_name: &str,
            owner_id: i32,
        ) -> Result<Option<Collection>, AppError> {
            Ok(self
                .state
                .lock()
                .unwrap()
                .collections
                .iter()
                .find(|c| c.name == collection_name && c.user_id == owner_id)
                .cloned())
        }

        async fn find_first_by_name(
            &self,
            collection_name: &str,
        ) -> Result<Option<Collection>, AppError> {
            Ok(self
                .state
                .lock()
                .unwrap()
                .collections
                .iter()
                .find(|c| c.name == collection_name)
                .cloned())
        }

        async fn find_by_id(&self, collection_id: i32) -> Result<Option<Collection>, AppError> {
            Ok(self
                .state
                .lock()
                .unwrap()
                .collections
                .iter()
                .find(|c| c.id == collection_id)
                .cloned())
        }

        async fn list_by_user(&self, owner_id: i32) -> Result<Vec<Collection>, AppError> {
            Ok(self
                .state
                .lock()
                .unwrap()
                .collections
                .iter()
                .filter(|c| c.user_id == owner_id)
                .cloned()
                .collect())
        }

        async fn headlines_for(&self, collection_id: i32) -> Result<Vec<Headline>, AppError> {
            let tables = self.state.lock().unwrap();
            Ok(tables
                .headlines
                .iter()
                .filter(|h| {
                    tables
                        .associations
                        .iter()
                        .any(|&(news_id, col_id)| news_id == h.id && col_id == collection_id)
                })
                .cloned()
                .collect())
        }

        async fn delete(&self, collection_id: i32) -> Result<usize, AppError> {
            let mut tables = self.state.lock().unwrap();
            tables
                .associations
                .retain(|&(_, col_id)| col_id != collection_id);
            let before = tables.collections.len();
            tables.collections.retain(|c| c.id != collection_id);
            Ok(before - tables.collections.len())
        }
    }

    #[tokio::test]
    async fn repeated_get_or_create_reuses_the_existing_collection() {
        let store = Arc::new(FakeCollectionStore::with_headlines(&["first", "second"]));
        let service = CollectionService::new(store.clone());

        let first = service.get_or_create(7, "politics", &[1, 2]).await.unwrap();
        let CollectionOutcome::Created(created) = first else {
            panic!("expected a fresh collection");
        };

        // A second submission with a different selection finds the row
        // and leaves the stored associations untouched.
        let second = service.get_or_create(7, "politics", &[2]).await.unwrap();
        let CollectionOutcome::AlreadyExists(existing) = second else {
            panic!("expected the existing collection");
        };

        assert_eq!(existing.id, created.id);
        assert_eq!(store.collection_count(), 1);
        assert_eq!(store.association_rows(), [(1, created.id), (2, created.id)]);
    }

    #[tokio::test]
    async fn the_same_name_under_another_owner_is_a_separate_collection() {
        let store = Arc::new(FakeCollectionStore::with_headlines(&["first"]));
        let service = CollectionService::new(store.clone());

        service.get_or_create(7, "politics", &[1]).await.unwrap();
        let other = service.get_or_create(8, "politics", &[1]).await.unwrap();

        assert!(matches!(other, CollectionOutcome::Created(_)));
        assert_eq!(store.collection_count(), 2);
    }

    #[tokio::test]
    async fn delete_by_name_removes_associations_but_keeps_headlines() {
        let store = Arc::new(FakeCollectionStore::with_headlines(&["first", "second"]));
        let service = CollectionService::new(store.clone());

        service.get_or_create(7, "politics", &[1, 2]).await.unwrap();
        let deleted = service.delete_by_name("politics").await.unwrap();

        assert_eq!(deleted.name, "politics");
        assert_eq!(store.collection_count(), 0);
        assert!(store.association_rows().is_empty());
        assert_eq!(store.headline_count(), 2);
    }

    #[tokio::test]
    async fn deleting_an_unknown_name_is_a_structured_not_found() {
        let service = CollectionService::new(Arc::new(FakeCollectionStore::default()));

        let result = service.delete_by_name("ghosts").await;

        assert!(matches!(
            result,
            Err(AppError::NotFound { entity, .. }) if entity == "collection"
        ));
    }
}
