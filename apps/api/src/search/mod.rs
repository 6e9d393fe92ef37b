// Job search: query building, paginated fetch, normalization, aggregation.
// Data flows one way: query → fetcher → normalizer → aggregator → handlers.

pub mod aggregator;
pub mod client;
pub mod fetcher;
pub mod handlers;
pub mod normalizer;
pub mod query;
