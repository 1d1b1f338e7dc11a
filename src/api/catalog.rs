use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::validation::lenient_int;
use super::{ApiError, AppState, FlavorDto, ListingResponse, PageQuery, ProteinDto, VegetableDto};
use crate::domain::PageRequest;
use crate::models::catalog::CatalogKind;
use crate::services::CatalogError;

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Database(msg) => Self::internal(msg),
        }
    }
}

fn page_request(state: &AppState, kind: CatalogKind, query: &PageQuery) -> PageRequest {
    state.catalog_service().page_request(
        kind,
        lenient_int(query.page.as_deref()),
        lenient_int(query.per_page.as_deref()),
    )
}

/// `GET /api/vegetables`
pub async fn list_vegetables(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ListingResponse<VegetableDto>>, ApiError> {
    let request = page_request(&state, CatalogKind::Vegetables, &query);
    let page = state.catalog_service().list_vegetables(request).await?;
    Ok(Json(page.into()))
}

/// `GET /api/proteins`
pub async fn list_proteins(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ListingResponse<ProteinDto>>, ApiError> {
    let request = page_request(&state, CatalogKind::Proteins, &query);
    let page = state.catalog_service().list_proteins(request).await?;
    Ok(Json(page.into()))
}

/// `GET /api/flavors`
pub async fn list_flavors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ListingResponse<FlavorDto>>, ApiError> {
    let request = page_request(&state, CatalogKind::Flavors, &query);
    let page = state.catalog_service().list_flavors(request).await?;
    Ok(Json(page.into()))
}
