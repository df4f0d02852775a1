//! Service layer: business rules on top of the repositories.

mod collection_service;
mod news_service;
mod source_service;
mod user_service;

use std::sync::Arc;

pub use collection_service::{CollectionOutcome, CollectionService};
pub use news_service::NewsService;
pub use source_service::{DUPLICATE_SOURCE_MESSAGE, SourceService};
pub use user_service::UserService;

use crate::external::headlines::HeadlineProvider;
use crate::repositories::Repositories;

/// Aggregates all services for handler access through AppState.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub news: NewsService,
    pub sources: SourceService,
    pub collections: CollectionService,
}

impl Services {
    pub fn new(repos: Repositories, provider: Arc<dyn HeadlineProvider>) -> Self {
        Self {
            users: UserService::new(Arc::new(repos.users)),
            news: NewsService::new(Arc::new(repos.headlines), provider),
            sources: SourceService::new(Arc::new(repos.sources)),
            collections: CollectionService::new(Arc::new(repos.collections)),
        }
    }
}
