//! Data transfer objects for the API layer.

mod auth;
mod collections;
mod error;
mod flash;
mod news;
mod sources;

pub use auth::{LoginForm, RegisterForm, UserResponse};
pub use collections::{
    ArticleChoice, CollectionDetailPage, CollectionResponse, CollectionsPage, CreateCollectionForm,
    CreateCollectionPage,
};
pub use error::ErrorResponse;
pub use flash::Flash;
pub use news::{
    HeadlineResponse, KeywordForm, NewsPage, NewsResultsPage, UpdateHeadlineForm,
    KEYWORD_CHARS_MESSAGE,
};
pub use sources::{SourceForm, SourceResponse, SourcesPage};
