// src/models/mod.rs

//! Domain models for the catalog crawler.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod course;
mod semester;
mod term;

// Re-export all public types
pub use config::{ApiConfig, Config, CrawlerConfig, IngestConfig, MAX_PAGE_SIZE};
pub use course::{Course, Gpa, Relationships};
pub use semester::SemesterIndex;
pub use term::Term;

/// Minimal course identifier from the per-semester course list.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CourseListing {
    pub course_id: String,
    #[serde(default)]
    pub name: Option<String>,
}
