use std::sync::Arc;
use std::time::Duration;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::db::Store;
use crate::services::{
    CatalogService, FeedbackService, RecipeService, SeaOrmCatalogService, SeaOrmFeedbackService,
    SeaOrmRecipeService,
};

/// Long-lived services built once at startup and handed to every request.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub catalog_service: Arc<dyn CatalogService>,

    pub recipe_service: Arc<dyn RecipeService>,

    pub feedback_service: Arc<dyn FeedbackService>,

    /// `None` when the response cache is disabled.
    pub response_cache: Option<ResponseCache>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    /// Wires the services around an already opened store.
    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let catalog_service = Arc::new(SeaOrmCatalogService::new(
            store.clone(),
            config.pagination.clone(),
        )) as Arc<dyn CatalogService + Send + Sync + 'static>;

        let recipe_service = Arc::new(SeaOrmRecipeService::new(store.clone()))
            as Arc<dyn RecipeService + Send + Sync + 'static>;

        let feedback_service = Arc::new(SeaOrmFeedbackService::new(
            store.clone(),
            config.pagination.comments_per_page,
        )) as Arc<dyn FeedbackService + Send + Sync + 'static>;

        let response_cache = config
            .cache
            .enabled
            .then(|| ResponseCache::new(Duration::from_secs(config.cache.ttl_seconds)));

        Self {
            config: Arc::new(config),
            store,
            catalog_service,
            recipe_service,
            feedback_service,
            response_cache,
        }
    }
}
