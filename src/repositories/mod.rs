//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities.

mod collection_repo;
mod headline_repo;
mod source_repo;
mod user_repo;

pub use collection_repo::{CollectionRepository, CollectionStore};
pub use headline_repo::{HeadlineRepository, HeadlineStore};
pub use source_repo::{SourceRepository, SourceStore};
pub use user_repo::{UserRepository, UserStore};

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub headlines: HeadlineRepository,
    pub sources: SourceRepository,
    pub collections: CollectionRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            headlines: HeadlineRepository::new(pool.clone()),
            sources: SourceRepository::new(pool.clone()),
            collections: CollectionRepository::new(pool),
        }
    }
}
