use anyhow::{Context, Result};

const DEFAULT_ADZUNA_BASE_URL: &str = "https://api.adzuna.com/v1/api/jobs";
const DEFAULT_COUNTRY: &str = "us";

/// Application configuration loaded from environment variables.
/// Startup fails if the search API credentials are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub adzuna_app_id: String,
    pub adzuna_app_key: String,
    pub adzuna_base_url: String,
    /// Country segment used when a search request does not name one ("us", "in", "gb", ...).
    pub default_country: String,
    /// Resume rewriting is disabled when unset.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            adzuna_app_id: require_env("ADZUNA_APP_ID")?,
            adzuna_app_key: require_env("ADZUNA_APP_KEY")?,
            adzuna_base_url: std::env::var("ADZUNA_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ADZUNA_BASE_URL.to_string()),
            default_country: std::env::var("ADZUNA_COUNTRY")
                .unwrap_or_else(|_| DEFAULT_COUNTRY.to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
