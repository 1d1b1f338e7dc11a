//! Domain service for the reference catalogs.
//!
//! Serves paginated listings of vegetables, proteins and flavors. Listings are
//! read-only; the data is written once by the seed loader.

use crate::domain::{Page, PageRequest};
use crate::models::catalog::{CatalogKind, Flavor, Protein, Vegetable};
use thiserror::Error;

/// Errors specific to catalog listings.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for catalog listings.
#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    /// Builds the page request for a listing, filling in the per-catalog
    /// default page size when `per_page` is absent and page 1 when `page` is.
    fn page_request(
        &self,
        kind: CatalogKind,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> PageRequest;

    /// Lists one page of vegetables ordered by identifier.
    async fn list_vegetables(&self, request: PageRequest)
    -> Result<Page<Vegetable>, CatalogError>;

    /// Lists one page of proteins ordered by identifier.
    async fn list_proteins(&self, request: PageRequest) -> Result<Page<Protein>, CatalogError>;

    /// Lists one page of flavors ordered by identifier.
    async fn list_flavors(&self, request: PageRequest) -> Result<Page<Flavor>, CatalogError>;
}
