//! Catalog ingestion pipeline.
//!
//! `run_ingest` is the entry point; it sequences the stages below:
//! - `semesters`: per-term membership for the reference year
//! - `paginate`: paginated catalog traversal for one term
//! - `refine`: dedup, level filter and enrichment
//! - `grades` / `classify`: per-course enrichment

mod classify;
mod grades;
mod ingest;
mod paginate;
mod refine;
mod semesters;

pub use ingest::{IngestOptions, IngestOutcome, last_completed_year, run_ingest};
pub use refine::{SkipReason, Skipped, is_undergraduate};
