// src/pipeline/ingest.rs

//! Catalog ingestion pipeline.

use std::collections::HashSet;

use chrono::{Datelike, Local};

use crate::models::{Config, Course, Term};
use crate::services::CatalogApi;
use crate::utils::Throttle;

use super::paginate::fetch_term_catalog;
use super::refine::{Skipped, refine_courses};
use super::semesters::build_semester_index;

/// Parameters of a single ingestion run.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Year whose terms are crawled and indexed
    pub reference_year: i32,
    pub requests_per_second: u32,
    pub page_size: u32,
}

impl IngestOptions {
    /// Options from configuration, defaulting the year to the last completed one.
    pub fn from_config(config: &Config) -> Self {
        Self {
            reference_year: config
                .ingest
                .reference_year
                .unwrap_or_else(last_completed_year),
            requests_per_second: config.crawler.requests_per_second,
            page_size: config.crawler.page_size,
        }
    }
}

/// The calendar year before the current one.
pub fn last_completed_year() -> i32 {
    Local::now().year() - 1
}

/// Summary of an ingestion run.
#[derive(Debug, Default)]
pub struct IngestOutcome {
    pub reference_year: i32,
    /// Deduplicated, enriched courses in crawl order
    pub courses: Vec<Course>,
    pub skipped: Vec<Skipped>,
    /// Raw courses received across all terms
    pub fetched: usize,
    /// Terms whose traversal ended on a failed request
    pub page_failures: usize,
    /// Whether semester membership data was available
    pub index_available: bool,
}

/// Run the full catalog ingestion.
///
/// Builds the semester index once, then crawls and refines each term in
/// order (fall, winter, spring, summer). Upstream failures degrade the result
/// but never abort the run.
pub async fn run_ingest(api: &dyn CatalogApi, options: &IngestOptions) -> IngestOutcome {
    let year = options.reference_year;
    log::info!("Building semester index for {}", year);
    let index = build_semester_index(api, year).await;
    if !index.is_available() {
        log::warn!("Semester index unavailable; courses will have no offered terms");
    }

    let mut outcome = IngestOutcome {
        reference_year: year,
        index_available: index.is_available(),
        ..IngestOutcome::default()
    };
    let mut seen = HashSet::new();
    let mut throttle = Throttle::per_second(options.requests_per_second);

    for term in Term::ALL {
        let token = term.token(year);
        log::info!("Now processing semester {} ({})", token, term);

        let catalog = fetch_term_catalog(api, &token, options.page_size, &mut throttle).await;
        log::info!(
            "Semester {}: fetched {} courses over {} pages",
            token,
            catalog.courses.len(),
            catalog.pages
        );
        outcome.fetched += catalog.courses.len();
        if catalog.failed {
            outcome.page_failures += 1;
        }

        let refined = refine_courses(api, catalog.courses, &mut seen, &index).await;
        log::info!(
            "Semester {}: kept {} courses, skipped {}",
            token,
            refined.courses.len(),
            refined.skipped.len()
        );
        outcome.courses.extend(refined.courses);
        outcome.skipped.extend(refined.skipped);
    }

    log::info!(
        "Ingestion complete: {} courses from {} fetched",
        outcome.courses.len(),
        outcome.fetched
    );
    outcome
}
