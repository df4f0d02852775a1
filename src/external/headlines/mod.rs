//! Client for the external news headline search API.

mod client;
mod types;

pub use client::{HeadlineProvider, NewsApiClient};
