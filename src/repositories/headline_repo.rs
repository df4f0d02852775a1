//! Headline repository for async database operations over the news table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Headline, NewHeadline};

/// Seam between the news service and the news table.
///
/// Production uses `HeadlineRepository`; tests substitute an in-memory
/// fake.
#[async_trait]
pub trait HeadlineStore: Send + Sync {
    /// Inserts a headline row. Intentionally no dedup by text: every
    /// successful keyword search stores a fresh row.
    async fn create(&self, new_headline: NewHeadline) -> Result<Headline, AppError>;

    /// Lists every saved headline in insertion order.
    async fn list_all(&self) -> Result<Vec<Headline>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Resolves a set of headline ids to rows, keeping insertion order.
    /// Unknown ids are silently skipped.
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Headline>, AppError>;

    /// Finds the first headline whose text matches exactly.
    ///
    /// Text is not unique; "first match" (lowest id) is the lookup
    /// contract for the edit-by-text path.
    async fn find_first_by_text(&self, text: &str) -> Result<Option<Headline>, AppError>;

    /// Overwrites the text of one headline row.
    async fn update_text(&self, headline_id: i32, new_text: &str) -> Result<Headline, AppError>;
}

#[derive(Clone)]
pub struct HeadlineRepository {
    pool: AsyncDbPool,
}

impl HeadlineRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeadlineStore for HeadlineRepository {
    async fn create(&self, new_headline: NewHeadline) -> Result<Headline, AppError> {
        use crate::schema::news::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(news)
            .values(&new_headline)
            .returning(Headline::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn list_all(&self) -> Result<Vec<Headline>, AppError> {
        use crate::schema::news::dsl::*;
        let mut conn = self.pool.get().await?;

        news.select(Headline::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn count(&self) -> Result<i64, AppError> {
        use crate::schema::news::dsl::*;
        let mut conn = self.pool.get().await?;

        news.count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Headline>, AppError> {
        use crate::schema::news::dsl::*;
        let mut conn = self.pool.get().await?;

        news.filter(id.eq_any(ids))
            .select(Headline::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_first_by_text(&self, text: &str) -> Result<Option<Headline>, AppError> {
        use crate::schema::news::dsl::*;
        let mut conn = self.pool.get().await?;

        news.filter(headline.eq(text))
            .select(Headline::as_select())
            .order(id.asc())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn update_text(&self, headline_id: i32, new_text: &str) -> Result<Headline, AppError> {
        use crate::schema::news::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(news.filter(id.eq(headline_id)))
            .set(headline.eq(new_text))
            .returning(Headline::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
