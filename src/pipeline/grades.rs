// src/pipeline/grades.rs

//! Average GPA enrichment from the grades source.

use crate::models::Gpa;
use crate::services::CatalogApi;

/// Look up the average GPA for `course_id`.
///
/// Never fails: a 4xx reply means the source has no data for the course, and
/// any other failure is logged. Both yield [`Gpa::Unknown`].
pub async fn lookup_gpa(api: &dyn CatalogApi, course_id: &str) -> Gpa {
    match api.fetch_average_gpa(course_id).await {
        Ok(reported) => {
            let gpa = Gpa::from_reported(reported);
            if !gpa.is_known() {
                log::info!("No grade data for {}, defaulting to {}", course_id, Gpa::SENTINEL);
            }
            gpa
        }
        Err(e) if e.is_client_error() => {
            log::info!("No grade data for {}, defaulting to {}", course_id, Gpa::SENTINEL);
            Gpa::Unknown
        }
        Err(e) => {
            log::warn!("Could not retrieve grades for {}: {}", course_id, e);
            Gpa::Unknown
        }
    }
}
