use diesel::prelude::*;
use jiff_diesel::DateTime;

/// A user-submitted place where they get their news from.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::sources)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Source {
    pub id: i32,
    pub source: String,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::sources)]
pub struct NewSource {
    pub source: String,
}
