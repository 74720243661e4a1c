//! Service layer for the catalog crawler.
//!
//! This module contains the upstream access used by the pipeline:
//! - Catalog and grades APIs (`CatalogApi`, `ApiClient`)

mod api;
#[cfg(test)]
pub(crate) mod test_support;

pub use api::{ApiClient, CatalogApi};
