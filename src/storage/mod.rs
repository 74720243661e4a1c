//! Storage abstractions for course persistence.
//!
//! ## Directory Structure
//!
//! ```text
//! storage/
//! ├── config.toml           # Crawler configuration
//! └── courses.json          # Ingested course catalog
//! ```

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Course;

// Re-export for convenience
pub use local::LocalStorage;

/// Counts from a batch save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
    pub saved: usize,
    /// Courses rejected because their code was already stored
    pub duplicates: usize,
    pub failed: usize,
}

/// On-disk layout of the course catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    /// ISO 8601 timestamp of last update
    pub updated_at: DateTime<Utc>,
    /// Total course count
    pub count: usize,
    /// The courses array
    pub courses: Vec<Course>,
}

impl CatalogData {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            updated_at: Utc::now(),
            count: courses.len(),
            courses,
        }
    }
}

/// Trait for course storage backends.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Store a single course.
    ///
    /// Fails with [`AppError::DuplicateCourse`](crate::error::AppError::DuplicateCourse)
    /// when a course with the same code is already stored.
    async fn save(&self, course: &Course) -> Result<()>;

    /// Store a batch of courses.
    ///
    /// Duplicates and per-course failures are logged and counted; they never
    /// abort the batch.
    async fn save_all(&self, courses: &[Course]) -> Result<SaveSummary>;

    /// Replace every stored course with `courses` in a single write.
    ///
    /// Refuses an empty batch so a failed run cannot wipe the catalog. The
    /// previous catalog stays intact if the write fails.
    async fn replace_all(&self, courses: &[Course]) -> Result<SaveSummary>;

    /// Number of stored courses.
    async fn count(&self) -> Result<usize>;

    /// Load every stored course.
    async fn load_all(&self) -> Result<Vec<Course>>;
}
