//! In-memory `CatalogApi` for pipeline tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{Course, CourseListing};
use crate::services::CatalogApi;

/// Canned upstream data. Courses without a grade entry answer 404.
#[derive(Default)]
pub struct StubApi {
    pages: HashMap<String, Vec<Vec<Course>>>,
    failing_pages: HashSet<(String, u32)>,
    lists: HashMap<String, Vec<String>>,
    failing_lists: HashSet<String>,
    grades: HashMap<String, Option<f64>>,
    failing_grades: HashSet<String>,
    page_requests: Mutex<Vec<(String, u32)>>,
    grade_requests: Mutex<Vec<String>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a catalog page for `token`. Pages are numbered from 1.
    pub fn with_page(mut self, token: &str, codes: &[&str]) -> Self {
        let page = codes.iter().map(|c| Course::new(*c)).collect();
        self.pages.entry(token.to_string()).or_default().push(page);
        self
    }

    pub fn with_failing_page(mut self, token: &str, page: u32) -> Self {
        self.failing_pages.insert((token.to_string(), page));
        self
    }

    pub fn with_list(mut self, token: &str, codes: &[&str]) -> Self {
        self.lists.insert(
            token.to_string(),
            codes.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    pub fn with_failing_list(mut self, token: &str) -> Self {
        self.failing_lists.insert(token.to_string());
        self
    }

    pub fn with_gpa(mut self, code: &str, gpa: f64) -> Self {
        self.grades.insert(code.to_string(), Some(gpa));
        self
    }

    /// Grade record exists but carries no average.
    pub fn with_null_gpa(mut self, code: &str) -> Self {
        self.grades.insert(code.to_string(), None);
        self
    }

    /// Grade lookups for `code` fail with a server error.
    pub fn with_grade_failure(mut self, code: &str) -> Self {
        self.failing_grades.insert(code.to_string());
        self
    }

    pub fn page_requests(&self) -> Vec<(String, u32)> {
        self.page_requests.lock().unwrap().clone()
    }

    pub fn grade_requests(&self) -> Vec<String> {
        self.grade_requests.lock().unwrap().clone()
    }

    fn status(status: u16) -> AppError {
        AppError::Status {
            url: "stub://".to_string(),
            status,
        }
    }
}

#[async_trait]
impl CatalogApi for StubApi {
    async fn fetch_course_page(
        &self,
        term_token: &str,
        page: u32,
        _per_page: u32,
    ) -> Result<Option<Vec<Course>>> {
        self.page_requests
            .lock()
            .unwrap()
            .push((term_token.to_string(), page));

        if self.failing_pages.contains(&(term_token.to_string(), page)) {
            return Err(Self::status(500));
        }
        Ok(self
            .pages
            .get(term_token)
            .and_then(|pages| pages.get((page as usize).checked_sub(1)?))
            .cloned())
    }

    async fn fetch_course_list(&self, term_token: &str) -> Result<Option<Vec<CourseListing>>> {
        if self.failing_lists.contains(term_token) {
            return Err(Self::status(502));
        }
        Ok(Some(
            self.lists
                .get(term_token)
                .into_iter()
                .flatten()
                .map(|code| CourseListing {
                    course_id: code.clone(),
                    name: None,
                })
                .collect(),
        ))
    }

    async fn fetch_average_gpa(&self, course_id: &str) -> Result<Option<f64>> {
        self.grade_requests
            .lock()
            .unwrap()
            .push(course_id.to_string());

        if self.failing_grades.contains(course_id) {
            return Err(Self::status(500));
        }
        match self.grades.get(course_id) {
            Some(gpa) => Ok(*gpa),
            None => Err(Self::status(404)),
        }
    }
}
