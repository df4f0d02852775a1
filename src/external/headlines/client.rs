use async_trait::async_trait;

use super::types::HeadlineSearchResponse;
use crate::config::NewsApiConfig;
use crate::error::AppResult;
use crate::external::client::HTTP_CLIENT;

/// Seam between the news service and the external headline API.
///
/// Production uses `NewsApiClient`; tests substitute a stub.
#[async_trait]
pub trait HeadlineProvider: Send + Sync {
    /// Fetches the title of the first article matching `keyword`.
    ///
    /// `Ok(None)` covers both "the API had nothing for this keyword" and
    /// every transport or parse failure; callers cannot tell the two
    /// apart, matching the user-facing behavior.
    async fn fetch_top_headline(&self, keyword: &str) -> AppResult<Option<String>>;
}

/// Client for the external headline search API.
pub struct NewsApiClient {
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig) -> Self {
        Self {
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }

    async fn search(&self, keyword: &str) -> Result<HeadlineSearchResponse, reqwest::Error> {
        HTTP_CLIENT
            .get(&self.base_url)
            .query(&[("apiKey", self.api_key.as_str()), ("q", keyword)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl HeadlineProvider for NewsApiClient {
    async fn fetch_top_headline(&self, keyword: &str) -> AppResult<Option<String>> {
        match self.search(keyword).await {
            Ok(response) => Ok(response.articles.into_iter().next().map(|a| a.title)),
            Err(error) => {
                // API failures are indistinguishable from empty results on
                // the user-facing path; they only show up in the logs.
                tracing::warn!(%keyword, %error, "headline API request failed");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> NewsApiClient {
        NewsApiClient::new(NewsApiConfig {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
        })
    }

    #[tokio::test]
    async fn unreachable_endpoint_folds_into_no_result() {
        // Nothing listens on this port; the transport error must not
        // surface to the caller.
        let client = client_for("http://127.0.0.1:39573/top-headlines");
        let result = client.fetch_top_headline("climate").await;
        assert!(matches!(result, Ok(None)));
    }
}
