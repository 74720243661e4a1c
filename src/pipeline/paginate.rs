// src/pipeline/paginate.rs

//! Paginated traversal of the full course catalog.

use crate::models::{Course, MAX_PAGE_SIZE};
use crate::services::CatalogApi;
use crate::utils::Throttle;

/// Raw courses collected for one term.
#[derive(Debug, Default)]
pub struct TermCatalog {
    pub courses: Vec<Course>,
    /// Number of non-empty pages received
    pub pages: u32,
    /// Whether traversal stopped on a failed request
    pub failed: bool,
}

/// Fetch every catalog page for `term_token`, starting at page 1.
///
/// Stops at the first empty or absent page. A failed request is logged and
/// ends traversal for this term with whatever was collected so far.
pub async fn fetch_term_catalog(
    api: &dyn CatalogApi,
    term_token: &str,
    page_size: u32,
    throttle: &mut Throttle,
) -> TermCatalog {
    let per_page = page_size.clamp(1, MAX_PAGE_SIZE);
    let mut catalog = TermCatalog::default();
    let mut page = 1;

    loop {
        throttle.wait().await;
        match api.fetch_course_page(term_token, page, per_page).await {
            Ok(Some(courses)) if !courses.is_empty() => {
                log::debug!(
                    "Term {} page {}: {} courses",
                    term_token,
                    page,
                    courses.len()
                );
                catalog.courses.extend(courses);
                catalog.pages += 1;
                page += 1;
            }
            Ok(_) => break,
            Err(e) => {
                log::warn!(
                    "Catalog request failed for term {} page {}: {}",
                    term_token,
                    page,
                    e
                );
                catalog.failed = true;
                break;
            }
        }
    }

    catalog
}
