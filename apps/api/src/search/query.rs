//! Query Builder — turns a user search into the wire parameters of the Adzuna search API.

use thiserror::Error;

/// Adzuna page size. Fixed for every request.
pub const RESULTS_PER_PAGE: u32 = 50;
pub const MIN_PAGES: u32 = 1;
pub const MAX_PAGES: u32 = 5;

#[derive(Debug, Error, PartialEq)]
#[error("page count must be between 1 and 5, got {0}")]
pub struct PageCountError(pub u32);

/// Number of pages to fetch, bounded to `MIN_PAGES..=MAX_PAGES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCount(u32);

impl PageCount {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageCount {
    fn default() -> Self {
        Self(MIN_PAGES)
    }
}

impl TryFrom<u32> for PageCount {
    type Error = PageCountError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (MIN_PAGES..=MAX_PAGES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PageCountError(value))
        }
    }
}

/// Lowercased country code if `raw` is a two-letter ASCII code ("us", "GB").
/// The code becomes a URL path segment, so nothing else is accepted.
pub fn parse_country(raw: &str) -> Option<String> {
    let code = raw.trim();
    (code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| code.to_ascii_lowercase())
}

/// One user-triggered search. Built fresh per request and never mutated.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub company: Option<String>,
    pub pages: PageCount,
    pub country: String,
}

impl SearchRequest {
    /// Free-text query as sent in `what`, with the company clause folded in.
    pub fn wire_query(&self) -> String {
        build_query_text(&self.query, self.company.as_deref())
    }

    pub fn wire_params(&self, page: u32) -> WireParams {
        build_wire_params(&self.query, self.company.as_deref(), &self.country, page)
    }
}

/// Exact request shape for a single page, minus the credentials the client appends.
#[derive(Debug, Clone, PartialEq)]
pub struct WireParams {
    pub country: String,
    pub page: u32,
    pub query: Vec<(&'static str, String)>,
}

impl WireParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Builds the wire parameters for one page.
///
/// The query text is passed through unvalidated; an empty query is the
/// upstream API's problem to reject.
pub fn build_wire_params(
    query: &str,
    company: Option<&str>,
    country: &str,
    page: u32,
) -> WireParams {
    WireParams {
        country: country.to_string(),
        page,
        query: vec![
            ("what", build_query_text(query, company)),
            ("results_per_page", RESULTS_PER_PAGE.to_string()),
            ("content-type", "application/json".to_string()),
        ],
    }
}

/// Adzuna has no company parameter: the filter rides inside the free text as
/// `company:"<name>"`.
pub fn build_query_text(query: &str, company: Option<&str>) -> String {
    let company = company.map(str::trim).filter(|c| !c.is_empty());
    match company {
        Some(name) if query.is_empty() => format!("company:\"{name}\""),
        Some(name) => format!("{query} company:\"{name}\""),
        None => query.to_string(),
    }
}
