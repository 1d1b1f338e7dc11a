use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::state::SharedState;

mod catalog;
mod error;
mod feedback;
mod observability;
mod recipes;
mod response_cache;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use crate::services::{CatalogService, FeedbackService, RecipeService};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<Config> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn catalog_service(&self) -> &Arc<dyn CatalogService> {
        &self.shared.catalog_service
    }

    #[must_use]
    pub fn recipe_service(&self) -> &Arc<dyn RecipeService> {
        &self.shared.recipe_service
    }

    #[must_use]
    pub fn feedback_service(&self) -> &Arc<dyn FeedbackService> {
        &self.shared.feedback_service
    }

    #[must_use]
    pub fn response_cache(&self) -> Option<&ResponseCache> {
        self.shared.response_cache.as_ref()
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .merge(create_catalog_router(state.clone()))
        .route("/find_recipes", get(recipes::find_recipes))
        .route("/like/{recipe_id}", post(feedback::like))
        .route("/like_recipe/{recipe_id}", post(feedback::like))
        .route("/dislike/{recipe_id}", post(feedback::dislike))
        .route("/dislike_recipe/{recipe_id}", post(feedback::dislike))
        .route("/add_comment/{recipe_id}", post(feedback::add_comment))
        .route("/get_comments/{recipe_id}", get(feedback::get_comments))
        .route("/health", get(observability::health))
        .route("/metrics", get(observability::get_metrics))
        .layer(middleware::from_fn(observability::logging_middleware))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

/// Catalog listings sit behind the response cache; nothing else does.
fn create_catalog_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/vegetables", get(catalog::list_vegetables))
        .route("/proteins", get(catalog::list_proteins))
        .route("/flavors", get(catalog::list_flavors))
        .route_layer(middleware::from_fn_with_state(
            state,
            response_cache::cache_middleware,
        ))
}
