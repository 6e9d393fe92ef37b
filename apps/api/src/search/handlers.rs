//! Axum route handlers for the Job Search API.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::models::stats::SearchStats;
use crate::search::aggregator::{summarize, DEFAULT_TOP_N};
use crate::search::fetcher::{fetch_all, FetchStatus, PageError};
use crate::search::query::{parse_country, PageCount, SearchRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub company: Option<String>,
    pub pages: Option<u32>,
    pub country: Option<String>,
    /// Size of the salary rankings.
    pub top: Option<usize>,
}

impl SearchParams {
    fn into_request(self, default_country: &str) -> Result<(SearchRequest, usize), AppError> {
        let pages = match self.pages {
            Some(n) => PageCount::try_from(n).map_err(|e| AppError::Validation(e.to_string()))?,
            None => PageCount::default(),
        };

        let top_n = self.top.unwrap_or(DEFAULT_TOP_N);
        if top_n == 0 {
            return Err(AppError::Validation("top must be at least 1".to_string()));
        }

        let country = match self.country.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_country(raw).ok_or_else(|| {
                AppError::Validation(format!("country must be a two-letter code, got {raw:?}"))
            })?,
            _ => default_country.to_string(),
        };

        let request = SearchRequest {
            query: self.q,
            company: self.company,
            pages,
            country,
        };
        Ok((request, top_n))
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub wire_query: String,
    pub pages_requested: u32,
    pub status: FetchStatus,
    pub total_results: usize,
    pub jobs: Vec<JobRecord>,
    pub page_errors: Vec<PageError>,
    pub stats: SearchStats,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub status: FetchStatus,
    pub total_results: usize,
    pub stats: SearchStats,
    pub page_errors: Vec<PageError>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs/search
///
/// Fetches up to five pages, then returns the listing and its breakdowns.
/// Page failures come back in `page_errors`; they never fail the request.
pub async fn handle_search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Query(params) = params?;
    let (request, top_n) = params.into_request(&state.config.default_country)?;
    info!(
        "Job search: what={:?} pages={} country={}",
        request.wire_query(),
        request.pages.get(),
        request.country
    );

    let outcome = fetch_all(state.search.as_ref(), &request).await;
    let stats = summarize(&outcome.jobs, top_n);

    Ok(Json(SearchResponse {
        wire_query: request.wire_query(),
        query: request.query,
        pages_requested: request.pages.get(),
        status: outcome.status(),
        total_results: outcome.jobs.len(),
        jobs: outcome.jobs,
        page_errors: outcome.page_errors,
        stats,
        fetched_at: Utc::now(),
    }))
}

/// GET /api/v1/jobs/stats
///
/// Same search as `/jobs/search`, returning only the chart data.
pub async fn handle_stats(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<StatsResponse>, AppError> {
    let Query(params) = params?;
    let (request, top_n) = params.into_request(&state.config.default_country)?;

    let outcome = fetch_all(state.search.as_ref(), &request).await;

    Ok(Json(StatsResponse {
        status: outcome.status(),
        total_results: outcome.jobs.len(),
        stats: summarize(&outcome.jobs, top_n),
        page_errors: outcome.page_errors,
    }))
}
