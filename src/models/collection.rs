use diesel::prelude::*;
use jiff_diesel::DateTime;

/// A named, user-owned grouping of saved headlines.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::collections)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Collection {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::collections)]
pub struct NewCollection {
    pub name: String,
    pub user_id: i32,
}

/// Association row linking a headline to a collection. Pure join table,
/// no payload beyond the two foreign keys.
#[derive(Debug, Insertable, Queryable, Clone)]
#[diesel(table_name = crate::schema::headline_collection)]
pub struct CollectionHeadline {
    pub news_id: i32,
    pub collection_id: i32,
}
