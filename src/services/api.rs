// src/services/api.rs

//! Upstream catalog and grades APIs.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{ApiConfig, Course, CourseListing, CrawlerConfig};
use crate::utils::{http, join_endpoint};

/// Read access to the two upstream data providers.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch one page of the full catalog for a `YYYYMM` term token.
    ///
    /// `Ok(None)` means the body was absent.
    async fn fetch_course_page(
        &self,
        term_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Option<Vec<Course>>>;

    /// Fetch the minified list of courses offered in a term.
    async fn fetch_course_list(&self, term_token: &str) -> Result<Option<Vec<CourseListing>>>;

    /// Look up the average GPA reported for a course.
    ///
    /// The grades source replies with a 4xx status for courses it has no data on.
    async fn fetch_average_gpa(&self, course_id: &str) -> Result<Option<f64>>;
}

/// Grades source record; only the average is used.
#[derive(Debug, Deserialize)]
struct GradeRecord {
    #[serde(default)]
    average_gpa: Option<f64>,
}

/// HTTP implementation of [`CatalogApi`].
pub struct ApiClient {
    client: reqwest::Client,
    courses_url: String,
    list_url: String,
    grades_url: String,
}

impl ApiClient {
    /// Create a client for the configured endpoints.
    pub fn new(api: &ApiConfig, crawler: &CrawlerConfig) -> Result<Self> {
        Ok(Self::with_client(http::create_async_client(crawler)?, api))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, api: &ApiConfig) -> Self {
        Self {
            client,
            courses_url: api.courses_url.clone(),
            list_url: join_endpoint(&api.courses_url, "list"),
            grades_url: api.grades_url.clone(),
        }
    }
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn fetch_course_page(
        &self,
        term_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Option<Vec<Course>>> {
        let query = [
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
            ("semester", term_token.to_string()),
        ];
        http::get_json(&self.client, &self.courses_url, &query).await
    }

    async fn fetch_course_list(&self, term_token: &str) -> Result<Option<Vec<CourseListing>>> {
        let query = [("semester", term_token.to_string())];
        http::get_json(&self.client, &self.list_url, &query).await
    }

    async fn fetch_average_gpa(&self, course_id: &str) -> Result<Option<f64>> {
        let query = [("name", course_id.to_string())];
        let record: Option<GradeRecord> =
            http::get_json(&self.client, &self.grades_url, &query).await?;
        Ok(record.and_then(|r| r.average_gpa))
    }
}
