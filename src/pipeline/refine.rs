// src/pipeline/refine.rs

//! Filtering and enrichment of a term's raw courses.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Course, SemesterIndex};
use crate::services::CatalogApi;

use super::classify::classify;
use super::grades::lookup_gpa;

/// Undergraduate course codes: level digit 0-4 after the department prefix.
static UNDERGRAD_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{4}[0-4][0-9]{2}[0-9A-Z]?$").expect("undergraduate pattern is valid")
});

/// Whether `course_id` is an undergraduate-level course code.
pub fn is_undergraduate(course_id: &str) -> bool {
    UNDERGRAD_CODE.is_match(course_id)
}

/// Why a course was dropped during refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Already kept earlier in the run
    Duplicate,
    NotUndergraduate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Duplicate => f.write_str("already been added"),
            SkipReason::NotUndergraduate => f.write_str("not undergrad level"),
        }
    }
}

/// A dropped course and the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub course_id: String,
    pub reason: SkipReason,
}

/// Result of refining one batch.
#[derive(Debug, Default)]
pub struct Refined {
    pub courses: Vec<Course>,
    pub skipped: Vec<Skipped>,
}

/// Filter and enrich a batch of raw courses.
///
/// Each course is checked for duplication against `seen` first and for
/// undergraduate level second, so a repeated graduate course is reported as a
/// duplicate. Survivors get their GPA and offered terms filled in and are
/// added to `seen`.
pub async fn refine_courses(
    api: &dyn CatalogApi,
    batch: Vec<Course>,
    seen: &mut HashSet<String>,
    index: &SemesterIndex,
) -> Refined {
    let mut refined = Refined::default();

    for mut course in batch {
        let reason = if seen.contains(&course.course_id) {
            Some(SkipReason::Duplicate)
        } else if !is_undergraduate(&course.course_id) {
            Some(SkipReason::NotUndergraduate)
        } else {
            None
        };

        if let Some(reason) = reason {
            log::info!("Cannot add {} ({})", course.course_id, reason);
            refined.skipped.push(Skipped {
                course_id: course.course_id,
                reason,
            });
            continue;
        }

        course.fill_department();
        course.average_gpa = lookup_gpa(api, &course.course_id).await;
        course.semesters = classify(&course.course_id, index);

        log::debug!(
            "Course {}: gpa={:.2} terms={:?} prereqs={:?} coreqs={:?} restrictions={:?} credit_granted_for={:?}",
            course.course_id,
            course.average_gpa.value(),
            course.semesters,
            course.relationships.prereqs,
            course.relationships.coreqs,
            course.relationships.restrictions,
            course.relationships.credit_granted_for,
        );

        seen.insert(course.course_id.clone());
        refined.courses.push(course);
    }

    refined
}
