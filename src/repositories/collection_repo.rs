//! Collection repository: the headlineCollection table plus its
//! many-to-many association with saved headlines.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Collection, CollectionHeadline, Headline, NewCollection};

/// Seam between the collection service and the headlineCollection table.
///
/// Production uses `CollectionRepository`; tests substitute an in-memory
/// fake.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Creates a collection and its association rows in one transaction.
    async fn create_with_headlines(
        &self,
        new_collection: NewCollection,
        headline_ids: &[i32],
    ) -> Result<Collection, AppError>;

    /// The get-or-create lookup: exact (name, owner) match.
    async fn find_by_name_and_user(
        &self,
        collection_name: &str,
        owner_id: i32,
    ) -> Result<Option<Collection>, AppError>;

    /// First collection matching a name, across all users. Names are not
    /// unique; lowest id wins. Backs the delete-by-name path.
    async fn find_first_by_name(
        &self,
        collection_name: &str,
    ) -> Result<Option<Collection>, AppError>;

    async fn find_by_id(&self, collection_id: i32) -> Result<Option<Collection>, AppError>;

    async fn list_by_user(&self, owner_id: i32) -> Result<Vec<Collection>, AppError>;

    /// Headlines associated with a collection, in insertion order.
    async fn headlines_for(&self, collection_id: i32) -> Result<Vec<Headline>, AppError>;

    /// Deletes a collection and its association rows. The headline rows
    /// themselves are left intact.
    async fn delete(&self, collection_id: i32) -> Result<usize, AppError>;
}

#[derive(Clone)]
pub struct CollectionRepository {
    pool: AsyncDbPool,
}

impl CollectionRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionStore for CollectionRepository {
    async fn create_with_headlines(
        &self,
        new_collection: NewCollection,
        headline_ids: &[i32],
    ) -> Result<Collection, AppError> {
        let mut conn = self.pool.get().await?;

        let headline_ids = headline_ids.to_vec();
        conn.transaction::<Collection, AppError, _>(|conn| {
            async move {
                let collection: Collection =
                    diesel::insert_into(crate::schema::collections::table)
                        .values(&new_collection)
                        .returning(Collection::as_returning())
                        .get_result(conn)
                        .await?;

                let associations: Vec<CollectionHeadline> = headline_ids
                    .iter()
                    .map(|&news_id| CollectionHeadline {
                        news_id,
                        collection_id: collection.id,
                    })
                    .collect();

                diesel::insert_into(crate::schema::headline_collection::table)
                    .values(&associations)
                    .execute(conn)
                    .await?;

                Ok(collection)
            }
            .scope_boxed()
        })
        .await
    }

    async fn find_by_name_and_user(
        &self,
        collection_name: &str,
        owner_id: i32,
    ) -> Result<Option<Collection>, AppError> {
        use crate::schema::collections::dsl::*;
        let mut conn = self.pool.get().await?;

        collections
            .filter(name.eq(collection_name).and(user_id.eq(owner_id)))
            .select(Collection::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn find_first_by_name(
        &self,
        collection_name: &str,
    ) -> Result<Option<Collection>, AppError> {
        use crate::schema::collections::dsl::*;
        let mut conn = self.pool.get().await?;

        collections
            .filter(name.eq(collection_name))
            .select(Collection::as_select())
            .order(id.asc())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, collection_id: i32) -> Result<Option<Collection>, AppError> {
        use crate::schema::collections::dsl::*;
        let mut conn = self.pool.get().await?;

        collections
            .filter(id.eq(collection_id))
            .select(Collection::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_by_user(&self, owner_id: i32) -> Result<Vec<Collection>, AppError> {
        use crate::schema::collections::dsl::*;
        let mut conn = self.pool.get().await?;

        collections
            .filter(user_id.eq(owner_id))
            .select(Collection::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn headlines_for(&self, collection_id: i32) -> Result<Vec<Headline>, AppError> {
        use crate::schema::{headline_collection, news};
        let mut conn = self.pool.get().await?;

        headline_collection::table
            .inner_join(news::table)
            .filter(headline_collection::collection_id.eq(collection_id))
            .select(Headline::as_select())
            .order(news::id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn delete(&self, collection_id: i32) -> Result<usize, AppError> {
        let mut conn = self.pool.get().await?;

        conn.transaction::<usize, AppError, _>(|conn| {
            async move {
                use crate::schema::{collections, headline_collection};

                diesel::delete(
                    headline_collection::table
                        .filter(headline_collection::collection_id.eq(collection_id)),
                )
                .execute(conn)
                .await?;

                let deleted =
                    diesel::delete(collections::table.filter(collections::id.eq(collection_id)))
                        .execute(conn)
                        .await?;

                Ok(deleted)
            }
            .scope_boxed()
        })
        .await
    }
}
