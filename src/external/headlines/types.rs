use serde::Deserialize;

/// Response body of the headline search endpoint.
///
/// Only the article titles are read; everything else the API returns is
/// ignored.
#[derive(Debug, Deserialize)]
pub struct HeadlineSearchResponse {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
pub struct Article {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_articles_array() {
        let body = r#"{"status":"ok","articles":[{"title":"Climate Summit Opens","author":null},{"title":"Second"}]}"#;
        let parsed: HeadlineSearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.articles.len(), 2);
        assert_eq!(parsed.articles[0].title, "Climate Summit Opens");
    }

    #[test]
    fn missing_articles_field_defaults_to_empty() {
        let parsed: HeadlineSearchResponse = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert!(parsed.articles.is_empty());
    }
}
