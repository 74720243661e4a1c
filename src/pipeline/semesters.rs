// src/pipeline/semesters.rs

//! Semester index construction from the per-term course lists.

use crate::error::Result;
use crate::models::{SemesterIndex, Term};
use crate::services::CatalogApi;

/// Build the semester index for `year` from the four minified course lists.
///
/// If any lookup fails the whole index is empty, so classification degrades
/// instead of aborting the run. No retries.
pub async fn build_semester_index(api: &dyn CatalogApi, year: i32) -> SemesterIndex {
    match fetch_term_lists(api, year).await {
        Ok(index) => {
            for term in Term::ALL {
                log::debug!(
                    "{} {}: {} courses offered",
                    term,
                    year,
                    index.term_len(term)
                );
            }
            index
        }
        Err(e) => {
            log::error!("Could not retrieve semester data for {}: {}", year, e);
            SemesterIndex::empty()
        }
    }
}

async fn fetch_term_lists(api: &dyn CatalogApi, year: i32) -> Result<SemesterIndex> {
    let mut terms = Vec::with_capacity(Term::ALL.len());
    for term in Term::ALL {
        let listings = api
            .fetch_course_list(&term.token(year))
            .await?
            .unwrap_or_default();
        terms.push((term, listings.into_iter().map(|l| l.course_id)));
    }
    Ok(SemesterIndex::new(year, terms))
}
