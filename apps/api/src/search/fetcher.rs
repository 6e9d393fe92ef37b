//! Paginated Fetcher — best-effort, strictly sequential page loop.
//!
//! A failing page is recorded and logged, then the loop moves on. Nothing here
//! retries: with at most five pages the caller simply asks again.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::job::JobRecord;
use crate::search::client::SearchBackend;
use crate::search::normalizer::normalize;
use crate::search::query::SearchRequest;

/// Why a single page contributed no records.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageError {
    #[error("page {page}: upstream returned {status}: {body}")]
    UpstreamStatus { page: u32, status: u16, body: String },

    #[error("page {page}: request failed: {message}")]
    Transport { page: u32, message: String },

    #[error("page {page}: response body is not JSON: {message}")]
    MalformedBody { page: u32, message: String },
}

impl PageError {
    pub fn page(&self) -> u32 {
        match self {
            PageError::UpstreamStatus { page, .. }
            | PageError::Transport { page, .. }
            | PageError::MalformedBody { page, .. } => *page,
        }
    }
}

/// How a fetch ended, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    /// Every page answered and at least one record came back.
    Ok,
    /// Some pages failed; the records of the others are returned.
    Partial,
    /// Nothing to show. Not an error.
    NoResults,
}

/// Result set of one fetch: records in page order plus per-page failures.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub jobs: Vec<JobRecord>,
    pub page_errors: Vec<PageError>,
}

impl FetchOutcome {
    pub fn status(&self) -> FetchStatus {
        if self.jobs.is_empty() {
            FetchStatus::NoResults
        } else if self.page_errors.is_empty() {
            FetchStatus::Ok
        } else {
            FetchStatus::Partial
        }
    }
}

/// Fetches pages `1..=request.pages` one after another and accumulates the
/// normalized results.
pub async fn fetch_all(backend: &dyn SearchBackend, request: &SearchRequest) -> FetchOutcome {
    let mut outcome = FetchOutcome::default();

    for page in 1..=request.pages.get() {
        let params = request.wire_params(page);

        let raw = match backend.get_page(&params).await {
            Ok(raw) => raw,
            Err(e) => {
                record_failure(
                    &mut outcome,
                    PageError::Transport {
                        page,
                        message: e.to_string(),
                    },
                );
                continue;
            }
        };

        if raw.status != 200 {
            record_failure(
                &mut outcome,
                PageError::UpstreamStatus {
                    page,
                    status: raw.status,
                    body: raw.body,
                },
            );
            continue;
        }

        let body: Value = match serde_json::from_str(&raw.body) {
            Ok(body) => body,
            Err(e) => {
                record_failure(
                    &mut outcome,
                    PageError::MalformedBody {
                        page,
                        message: e.to_string(),
                    },
                );
                continue;
            }
        };

        let before = outcome.jobs.len();
        outcome.jobs.extend(results_of(&body).iter().map(normalize));
        info!("Page {page}: {} jobs", outcome.jobs.len() - before);
    }

    info!(
        "Fetched {} jobs across {} pages ({} failed) for {:?}",
        outcome.jobs.len(),
        request.pages.get(),
        outcome.page_errors.len(),
        request.wire_query()
    );

    outcome
}

fn results_of(body: &Value) -> &[Value] {
    body.get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn record_failure(outcome: &mut FetchOutcome, error: PageError) {
    warn!(page = error.page(), "Search {error}");
    outcome.page_errors.push(error);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::search::client::{RawPage, SearchError};
    use crate::search::query::{PageCount, WireParams};

    /// Serves canned pages by page number and records every request.
    #[derive(Default)]
    struct ScriptedBackend {
        pages: HashMap<u32, RawPage>,
        calls: Mutex<Vec<WireParams>>,
    }

    impl ScriptedBackend {
        fn with_page(mut self, page: u32, status: u16, body: serde_json::Value) -> Self {
            self.pages.insert(
                page,
                RawPage {
                    status,
                    body: body.to_string(),
                },
            );
            self
        }

        fn with_raw(mut self, page: u32, status: u16, body: &str) -> Self {
            self.pages.insert(
                page,
                RawPage {
                    status,
                    body: body.to_string(),
                },
            );
            self
        }

        fn calls(&self) -> Vec<WireParams> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchBackend for ScriptedBackend {
        async fn get_page(&self, params: &WireParams) -> Result<RawPage, SearchError> {
            self.calls.lock().unwrap().push(params.clone());
            Ok(self.pages.get(&params.page).cloned().unwrap_or(RawPage {
                status: 200,
                body: json!({"results": []}).to_string(),
            }))
        }
    }

    fn request(query: &str, pages: u32) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
            company: None,
            pages: PageCount::try_from(pages).unwrap(),
            country: "us".to_string(),
        }
    }

    fn company_job(name: &str) -> serde_json::Value {
        json!({"title": "Engineer", "company": {"display_name": name}})
    }

    #[tokio::test]
    async fn test_one_request_per_page_in_order() {
        for pages in 1..=5 {
            let backend = ScriptedBackend::default();
            fetch_all(&backend, &request("rust", pages)).await;

            let calls = backend.calls();
            assert_eq!(calls.len(), pages as usize);
            for (i, call) in calls.iter().enumerate() {
                assert_eq!(call.page, i as u32 + 1);
                assert_eq!(call.get("results_per_page"), Some("50"));
            }
        }
    }

    #[tokio::test]
    async fn test_accumulates_across_pages_in_order() {
        let backend = ScriptedBackend::default()
            .with_page(1, 200, json!({"results": [company_job("Acme"), company_job("Beta")]}))
            .with_page(2, 200, json!({"results": [company_job("Acme")]}));

        let outcome = fetch_all(&backend, &request("rust", 2)).await;
        let companies: Vec<_> = outcome
            .jobs
            .iter()
            .map(|j| j.company.as_deref().unwrap())
            .collect();
        assert_eq!(companies, vec!["Acme", "Beta", "Acme"]);
        assert_eq!(outcome.status(), FetchStatus::Ok);
    }

    #[tokio::test]
    async fn test_failed_page_does_not_abort_others() {
        let backend = ScriptedBackend::default()
            .with_raw(1, 500, "upstream exploded")
            .with_page(2, 200, json!({"results": [company_job("Acme")]}));

        let outcome = fetch_all(&backend, &request("rust", 2)).await;
        assert_eq!(backend.calls().len(), 2);
        assert_eq!(outcome.jobs.len(), 1);
        assert_eq!(outcome.page_errors.len(), 1);
        match &outcome.page_errors[0] {
            PageError::UpstreamStatus { page, status, body } => {
                assert_eq!(*page, 1);
                assert_eq!(*status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(outcome.status(), FetchStatus::Partial);
    }

    #[tokio::test]
    async fn test_all_pages_failing_is_no_results() {
        let backend = ScriptedBackend::default().with_raw(1, 500, "boom");

        let outcome = fetch_all(&backend, &request("rust", 1)).await;
        assert!(outcome.jobs.is_empty());
        assert_eq!(outcome.page_errors.len(), 1);
        assert_eq!(outcome.status(), FetchStatus::NoResults);
    }

    #[tokio::test]
    async fn test_missing_results_list_is_empty_page() {
        let backend = ScriptedBackend::default().with_page(1, 200, json!({"count": 0}));

        let outcome = fetch_all(&backend, &request("rust", 1)).await;
        assert!(outcome.jobs.is_empty());
        assert!(outcome.page_errors.is_empty());
        assert_eq!(outcome.status(), FetchStatus::NoResults);
    }

    #[tokio::test]
    async fn test_malformed_body_recorded_per_page() {
        let backend = ScriptedBackend::default()
            .with_raw(1, 200, "<html>not json</html>")
            .with_page(2, 200, json!({"results": [company_job("Beta")]}));

        let outcome = fetch_all(&backend, &request("rust", 2)).await;
        assert_eq!(outcome.jobs.len(), 1);
        assert!(matches!(
            outcome.page_errors[0],
            PageError::MalformedBody { page: 1, .. }
        ));
    }

    #[tokio::test]
    async fn test_company_filter_reaches_every_page() {
        let backend = ScriptedBackend::default();
        let mut req = request("engineer", 2);
        req.company = Some("Microsoft".to_string());

        fetch_all(&backend, &req).await;
        for call in backend.calls() {
            assert_eq!(call.get("what"), Some("engineer company:\"Microsoft\""));
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl SearchBackend for FailingBackend {
        async fn get_page(&self, _params: &WireParams) -> Result<RawPage, SearchError> {
            // An unparseable URL yields a reqwest builder error without touching the network.
            let err = reqwest::Client::new()
                .get("not a url")
                .build()
                .unwrap_err();
            Err(SearchError::Http(err))
        }
    }

    #[tokio::test]
    async fn test_transport_errors_recorded_for_each_page() {
        let outcome = fetch_all(&FailingBackend, &request("rust", 3)).await;
        let pages: Vec<u32> = outcome.page_errors.iter().map(PageError::page).collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert!(outcome
            .page_errors
            .iter()
            .all(|e| matches!(e, PageError::Transport { .. })));
    }
}
