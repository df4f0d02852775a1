use diesel::prelude::*;
use jiff_diesel::DateTime;

/// A saved news headline, one row per successful keyword search.
///
/// There is no uniqueness constraint on the text: searching the same
/// keyword twice stores two rows even when the titles are identical.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::news)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Headline {
    pub id: i32,
    pub headline: String,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::news)]
pub struct NewHeadline {
    pub headline: String,
}
