//! Application state for the Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::config::{NewsApiConfig, SessionConfig};
use crate::db::AsyncDbPool;
use crate::external::headlines::NewsApiClient;
use crate::repositories::Repositories;
use crate::services::Services;
use crate::sessions::SessionStore;

/// Application state containing all shared services and resources.
///
/// Designed for Axum's State extractor. Cloning is cheap: Services and
/// AsyncDbPool use Arc internally and SessionStore shares its map.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// In-memory login sessions
    pub sessions: SessionStore,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
}

impl AppState {
    /// Creates a new AppState from a database connection pool and the
    /// session and news API configuration.
    pub fn new(
        pool: AsyncDbPool,
        session_config: SessionConfig,
        news_config: &NewsApiConfig,
    ) -> Self {
        let repos = Repositories::new(pool.clone());
        let provider = Arc::new(NewsApiClient::new(news_config.clone()));
        let services = Services::new(repos, provider);
        Self {
            services,
            sessions: SessionStore::new(session_config),
            db_pool: pool,
        }
    }
}
