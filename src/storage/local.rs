//! Local filesystem storage implementation.
//!
//! Keeps the whole catalog in a single `courses.json` under the root
//! directory. Writes go to a temp file first and are renamed into place.

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::Course;
use crate::storage::{CatalogData, CourseStore, SaveSummary};

const CATALOG_KEY: &str = "courses.json";

/// Local filesystem storage backend.
#[derive(Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Path of the catalog file.
    pub fn catalog_path(&self) -> PathBuf {
        self.path(CATALOG_KEY)
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(key, &bytes).await
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Load the catalog file, if one has been written.
    pub async fn load_catalog(&self) -> Result<Option<CatalogData>> {
        self.read_json(CATALOG_KEY).await
    }

    async fn write_catalog(&self, courses: Vec<Course>) -> Result<()> {
        let data = CatalogData::new(courses);
        log::info!(
            "Writing {} courses to {}",
            data.count,
            self.catalog_path().display()
        );
        self.write_json(CATALOG_KEY, &data).await
    }
}

fn check_storable(course: &Course) -> Result<()> {
    if course.course_id.trim().is_empty() {
        return Err(AppError::validation("course has an empty course_id"));
    }
    Ok(())
}

/// Append `courses` to `stored`, skipping conflicts and unstorable records.
fn merge_into(stored: &mut Vec<Course>, courses: &[Course]) -> SaveSummary {
    let mut known: HashSet<String> = stored.iter().map(|c| c.course_id.clone()).collect();
    let mut summary = SaveSummary::default();

    for course in courses {
        if let Err(e) = check_storable(course) {
            log::error!("Failed to save course {:?}: {}", course.course_id, e);
            summary.failed += 1;
            continue;
        }
        if !known.insert(course.course_id.clone()) {
            log::warn!("Course not added: {} (already stored)", course.course_id);
            summary.duplicates += 1;
            continue;
        }
        stored.push(course.clone());
        summary.saved += 1;
    }
    summary
}

#[async_trait]
impl CourseStore for LocalStorage {
    async fn save(&self, course: &Course) -> Result<()> {
        check_storable(course)?;
        let mut courses = self.load_all().await?;
        if courses.iter().any(|c| c == course) {
            return Err(AppError::DuplicateCourse(course.course_id.clone()));
        }
        courses.push(course.clone());
        self.write_catalog(courses).await
    }

    async fn save_all(&self, courses: &[Course]) -> Result<SaveSummary> {
        let mut stored = self.load_all().await?;
        let summary = merge_into(&mut stored, courses);
        self.write_catalog(stored).await?;
        Ok(summary)
    }

    async fn replace_all(&self, courses: &[Course]) -> Result<SaveSummary> {
        let mut replacement = Vec::with_capacity(courses.len());
        let summary = merge_into(&mut replacement, courses);
        if replacement.is_empty() {
            return Err(AppError::storage(format!(
                "refusing to replace {} with an empty catalog",
                self.catalog_path().display()
            )));
        }
        self.write_catalog(replacement).await?;
        Ok(summary)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.load_catalog().await?.map_or(0, |data| data.courses.len()))
    }

    async fn load_all(&self) -> Result<Vec<Course>> {
        Ok(self
            .load_catalog()
            .await?
            .map(|data| data.courses)
            .unwrap_or_default())
    }
}
