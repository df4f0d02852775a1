//! Source repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewSource, Source};

/// Seam between the source service and the sources table.
///
/// Production uses `SourceRepository`; tests substitute an in-memory
/// fake.
#[async_trait]
pub trait SourceStore: Send + Sync {
    async fn create(&self, new_source: NewSource) -> Result<Source, AppError>;

    /// Exact-text lookup backing the duplicate check; the schema itself
    /// does not enforce uniqueness.
    async fn find_by_text(&self, text: &str) -> Result<Option<Source>, AppError>;

    async fn list_all(&self) -> Result<Vec<Source>, AppError>;
}

#[derive(Clone)]
pub struct SourceRepository {
    pool: AsyncDbPool,
}

impl SourceRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SourceStore for SourceRepository {
    async fn create(&self, new_source: NewSource) -> Result<Source, AppError> {
        use crate::schema::sources::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(sources)
            .values(&new_source)
            .returning(Source::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_text(&self, text: &str) -> Result<Option<Source>, AppError> {
        use crate::schema::sources::dsl::*;
        let mut conn = self.pool.get().await?;

        sources
            .filter(source.eq(text))
            .select(Source::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_all(&self) -> Result<Vec<Source>, AppError> {
        use crate::schema::sources::dsl::*;
        let mut conn = self.pool.get().await?;

        sources
            .select(Source::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
