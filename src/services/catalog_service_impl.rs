//! `SeaORM` implementation of the `CatalogService` trait.

use crate::config::PaginationConfig;
use crate::db::Store;
use crate::domain::{Page, PageRequest};
use crate::models::catalog::{CatalogKind, Flavor, Protein, Vegetable};
use crate::services::catalog_service::{CatalogError, CatalogService};
use async_trait::async_trait;

pub struct SeaOrmCatalogService {
    store: Store,
    pagination: PaginationConfig,
}

impl SeaOrmCatalogService {
    #[must_use]
    pub const fn new(store: Store, pagination: PaginationConfig) -> Self {
        Self { store, pagination }
    }

    const fn default_per_page(&self, kind: CatalogKind) -> i64 {
        match kind {
            CatalogKind::Vegetables => self.pagination.vegetables_per_page,
            CatalogKind::Proteins => self.pagination.proteins_per_page,
            CatalogKind::Flavors => self.pagination.flavors_per_page,
        }
    }
}

#[async_trait]
impl CatalogService for SeaOrmCatalogService {
    fn page_request(
        &self,
        kind: CatalogKind,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> PageRequest {
        PageRequest::new(
            page.unwrap_or(1),
            per_page.unwrap_or_else(|| self.default_per_page(kind)),
        )
    }

    async fn list_vegetables(
        &self,
        request: PageRequest,
    ) -> Result<Page<Vegetable>, CatalogError> {
        Ok(self.store.list_vegetables(request).await?)
    }

    async fn list_proteins(&self, request: PageRequest) -> Result<Page<Protein>, CatalogError> {
        Ok(self.store.list_proteins(request).await?)
    }

    async fn list_flavors(&self, request: PageRequest) -> Result<Page<Flavor>, CatalogError> {
        Ok(self.store.list_flavors(request).await?)
    }
}
