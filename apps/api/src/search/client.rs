//! Search backends. `AdzunaClient` is the only production implementation;
//! `AppState` carries an `Arc<dyn SearchBackend>` so handlers and the fetcher
//! never depend on reqwest directly.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::search::query::WireParams;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Status and body of one search page, uninterpreted.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub status: u16,
    pub body: String,
}

/// One GET against the search API per call. Implementations must not retry.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn get_page(&self, params: &WireParams) -> Result<RawPage, SearchError>;
}

/// Adzuna job search client. Credentials are injected from configuration.
#[derive(Clone)]
pub struct AdzunaClient {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl AdzunaClient {
    pub fn new(base_url: String, app_id: String, app_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id,
            app_key,
        }
    }

    fn page_url(&self, params: &WireParams) -> String {
        format!("{}/{}/search/{}", self.base_url, params.country, params.page)
    }
}

#[async_trait]
impl SearchBackend for AdzunaClient {
    async fn get_page(&self, params: &WireParams) -> Result<RawPage, SearchError> {
        let url = self.page_url(params);
        debug!("GET {url} what={:?}", params.get("what"));

        let response = self
            .client
            .get(&url)
            .query(&[("app_id", &self.app_id), ("app_key", &self.app_key)])
            .query(&params.query)
            .send()
            .await
            .map_err(redact)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(redact)?;

        Ok(RawPage { status, body })
    }
}

/// reqwest errors display the full request URL, credentials included.
fn redact(e: reqwest::Error) -> SearchError {
    SearchError::Http(e.without_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fetcher::fetch_all;
    use crate::search::query::{build_wire_params, PageCount, SearchRequest};

    #[test]
    fn test_page_url_includes_country_and_page() {
        let client = AdzunaClient::new(
            "https://api.adzuna.com/v1/api/jobs/".to_string(),
            "id".to_string(),
            "key".to_string(),
        );
        let params = build_wire_params("rust", None, "in", 2);
        assert_eq!(
            client.page_url(&params),
            "https://api.adzuna.com/v1/api/jobs/in/search/2"
        );
    }

    #[tokio::test]
    async fn test_transport_errors_do_not_expose_credentials() {
        // nothing listens on port 1, so the connection is refused
        let client = AdzunaClient::new(
            "http://127.0.0.1:1".to_string(),
            "ID123".to_string(),
            "SECRETKEY".to_string(),
        );
        let request = SearchRequest {
            query: "rust".to_string(),
            company: None,
            pages: PageCount::try_from(2).unwrap(),
            country: "us".to_string(),
        };

        let outcome = fetch_all(&client, &request).await;
        assert_eq!(outcome.page_errors.len(), 2);

        let json = serde_json::to_string(&outcome.page_errors).unwrap();
        assert!(json.contains("transport"));
        assert!(!json.contains("SECRETKEY"));
        assert!(!json.contains("ID123"));
    }
}
