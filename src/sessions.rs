//! Server-side login sessions.
//!
//! Sessions live in process memory, keyed by a random token that travels
//! in an HttpOnly cookie. Logging in creates an entry; logging out or
//! expiry removes it. The "remember me" checkbox at login selects the
//! extended lifetime from `SessionConfig`.

use std::sync::Arc;

use axum::http::{HeaderMap, header};
use dashmap::DashMap;
use jiff::{Timestamp, ToSpan};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::models::User;

/// Data stored per live session.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    expires_at: Timestamp,
}

/// In-memory session store. Cloning is cheap; the map is shared.
#[derive(Clone)]
pub struct SessionStore {
    config: SessionConfig,
    entries: Arc<DashMap<Uuid, SessionData>>,
}

impl SessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Name of the cookie carrying the session token.
    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }

    /// Creates a session for a freshly authenticated user and returns the
    /// token together with the cookie lifetime in seconds.
    pub fn create(&self, user: &User, remember: bool) -> (Uuid, i64) {
        let ttl_hours = if remember {
            self.config.remember_ttl_hours
        } else {
            self.config.ttl_hours
        };

        let token = Uuid::new_v4();
        let data = SessionData {
            user_id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            expires_at: Timestamp::now() + ttl_hours.hours(),
        };
        self.entries.insert(token, data);

        (token, ttl_hours * 3600)
    }

    /// Resolves a token to its session data, enforcing expiry.
    ///
    /// Expired entries are removed lazily on access.
    pub fn resolve(&self, token: &Uuid) -> Option<SessionData> {
        let expired = {
            match self.entries.get(token) {
                Some(entry) if entry.expires_at > Timestamp::now() => {
                    return Some(entry.value().clone());
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            self.entries.remove(token);
        }
        None
    }

    /// Removes a session, ending the login.
    pub fn revoke(&self, token: &Uuid) {
        self.entries.remove(token);
    }

    /// Extracts the session token from the request's Cookie headers.
    pub fn token_from_headers(&self, headers: &HeaderMap) -> Option<Uuid> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.config.cookie_name)
            .and_then(|(_, token)| Uuid::parse_str(token).ok())
    }

    /// Builds the Set-Cookie value establishing a session.
    pub fn login_cookie(&self, token: &Uuid, max_age_secs: i64) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.config.cookie_name, token, max_age_secs
        )
    }

    /// Builds the Set-Cookie value clearing the session cookie.
    pub fn logout_cookie(&self) -> String {
        format!(
            "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
            self.config.cookie_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jiff_diesel::DateTime;

    fn test_user() -> User {
        let now = DateTime::from(jiff::civil::DateTime::default());
        User {
            id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "$argon2id$irrelevant".to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    fn store_with_ttls(ttl_hours: i64, remember_ttl_hours: i64) -> SessionStore {
        SessionStore::new(SessionConfig {
            cookie_name: "newsclip_session".to_string(),
            ttl_hours,
            remember_ttl_hours,
        })
    }

    #[test]
    fn create_then_resolve_round_trips_user_data() {
        let store = store_with_ttls(12, 336);
        let (token, max_age) = store.create(&test_user(), false);

        assert_eq!(max_age, 12 * 3600);
        let data = store.resolve(&token).expect("session should be live");
        assert_eq!(data.user_id, 7);
        assert_eq!(data.username, "alice");
        assert_eq!(data.email, "alice@example.com");
    }

    #[test]
    fn remember_me_selects_extended_lifetime() {
        let store = store_with_ttls(12, 336);
        let (_, max_age) = store.create(&test_user(), true);
        assert_eq!(max_age, 336 * 3600);
    }

    #[test]
    fn zero_ttl_sessions_are_already_expired() {
        let store = store_with_ttls(0, 0);
        let (token, _) = store.create(&test_user(), false);
        assert!(store.resolve(&token).is_none());
        // And the expired entry was removed
        assert!(store.entries.get(&token).is_none());
    }

    #[test]
    fn revoked_sessions_no_longer_resolve() {
        let store = store_with_ttls(12, 336);
        let (token, _) = store.create(&test_user(), false);
        store.revoke(&token);
        assert!(store.resolve(&token).is_none());
    }

    #[test]
    fn unknown_token_does_not_resolve() {
        let store = store_with_ttls(12, 336);
        assert!(store.resolve(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn token_parsed_from_cookie_header() {
        let store = store_with_ttls(12, 336);
        let (token, _) = store.create(&test_user(), false);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("other=1; newsclip_session={}; theme=dark", token))
                .unwrap(),
        );

        assert_eq!(store.token_from_headers(&headers), Some(token));
    }

    #[test]
    fn malformed_cookie_yields_no_token() {
        let store = store_with_ttls(12, 336);
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("newsclip_session=not-a-uuid"),
        );
        assert!(store.token_from_headers(&headers).is_none());
    }

    #[test]
    fn logout_cookie_expires_immediately() {
        let store = store_with_ttls(12, 336);
        assert!(store.logout_cookie().contains("Max-Age=0"));
    }
}
