//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream API endpoints
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Ingestion run settings
    #[serde(default)]
    pub ingest: IngestConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::config("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::config("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.requests_per_second == 0 {
            return Err(AppError::config("crawler.requests_per_second must be > 0"));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.crawler.page_size) {
            return Err(AppError::config(format!(
                "crawler.page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        validate_url("api.courses_url", &self.api.courses_url)?;
        validate_url("api.grades_url", &self.api.grades_url)?;
        Ok(())
    }
}

/// Largest page the catalog API serves.
pub const MAX_PAGE_SIZE: u32 = 100;

fn validate_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "{field} must be an http(s) URL, got {value}"
        )));
    }
    Ok(())
}

/// Upstream endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Paginated course catalog; the minified list lives at `{courses_url}/list`
    #[serde(default = "defaults::courses_url")]
    pub courses_url: String,

    /// Grades lookup by course name
    #[serde(default = "defaults::grades_url")]
    pub grades_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            courses_url: defaults::courses_url(),
            grades_url: defaults::grades_url(),
        }
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Ceiling on catalog page requests per second
    #[serde(default = "defaults::requests_per_second")]
    pub requests_per_second: u32,

    /// Courses per catalog page (at most 100)
    #[serde(default = "defaults::page_size")]
    pub page_size: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            requests_per_second: defaults::requests_per_second(),
            page_size: defaults::page_size(),
        }
    }
}

/// Ingestion run settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Year whose four terms build the semester index. Defaults to last year.
    #[serde(default)]
    pub reference_year: Option<i32>,
}

mod defaults {
    pub fn courses_url() -> String {
        "https://api.umd.io/v1/courses".into()
    }
    pub fn grades_url() -> String {
        "https://planetterp.com/api/v1/course".into()
    }

    pub fn user_agent() -> String {
        concat!("catalog-crawler/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn requests_per_second() -> u32 {
        5
    }
    pub fn page_size() -> u32 {
        super::MAX_PAGE_SIZE
    }
}
