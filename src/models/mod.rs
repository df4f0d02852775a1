mod collection;
mod headline;
mod source;
mod user;

pub use collection::{Collection, CollectionHeadline, NewCollection};
pub use headline::{Headline, NewHeadline};
pub use source::{NewSource, Source};
pub use user::{NewUser, User};
