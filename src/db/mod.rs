use crate::domain::{Page, PageRequest, RecipeId};
use crate::models::catalog::{Flavor, Protein, Vegetable};
use crate::models::comment::Comment;
use crate::models::recipe::{Combination, FeedbackKind, NewRecipe, RecipeSummary};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Every pooled connection to an in-memory SQLite URL opens its own database.
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn catalog_repo(&self) -> repositories::catalog::CatalogRepository {
        repositories::catalog::CatalogRepository::new(self.conn.clone())
    }

    fn recipe_repo(&self) -> repositories::recipe::RecipeRepository {
        repositories::recipe::RecipeRepository::new(self.conn.clone())
    }

    fn comment_repo(&self) -> repositories::comment::CommentRepository {
        repositories::comment::CommentRepository::new(self.conn.clone())
    }

    // Catalog

    pub async fn count_vegetables(&self) -> Result<u64> {
        self.catalog_repo().count_vegetables().await
    }

    pub async fn list_vegetables(&self, request: PageRequest) -> Result<Page<Vegetable>> {
        self.catalog_repo().list_vegetables(request).await
    }

    pub async fn insert_vegetables(&self, batch: &[Vegetable]) -> Result<u64> {
        self.catalog_repo().insert_vegetables(batch).await
    }

    pub async fn count_proteins(&self) -> Result<u64> {
        self.catalog_repo().count_proteins().await
    }

    pub async fn list_proteins(&self, request: PageRequest) -> Result<Page<Protein>> {
        self.catalog_repo().list_proteins(request).await
    }

    pub async fn insert_proteins(&self, batch: &[Protein]) -> Result<u64> {
        self.catalog_repo().insert_proteins(batch).await
    }

    pub async fn count_flavors(&self) -> Result<u64> {
        self.catalog_repo().count_flavors().await
    }

    pub async fn list_flavors(&self, request: PageRequest) -> Result<Page<Flavor>> {
        self.catalog_repo().list_flavors(request).await
    }

    pub async fn insert_flavors(&self, batch: &[Flavor]) -> Result<u64> {
        self.catalog_repo().insert_flavors(batch).await
    }

    // Recipes

    pub async fn count_recipes(&self) -> Result<u64> {
        self.recipe_repo().count().await
    }

    pub async fn recipe_exists(&self, recipe_id: &str) -> Result<bool> {
        self.recipe_repo().exists(recipe_id).await
    }

    pub async fn insert_recipes(&self, batch: Vec<(RecipeId, NewRecipe)>) -> Result<u64> {
        self.recipe_repo().insert_batch(batch).await
    }

    pub async fn find_recipes(&self, key: Combination) -> Result<Vec<RecipeSummary>> {
        self.recipe_repo().find_by_combination(key).await
    }

    pub async fn increment_feedback(
        &self,
        recipe_id: &str,
        kind: FeedbackKind,
    ) -> Result<Option<i32>> {
        self.recipe_repo().increment(recipe_id, kind).await
    }

    // Comments

    pub async fn add_comment(&self, recipe_id: &str, text: &str) -> Result<i32> {
        self.comment_repo().add(recipe_id, text).await
    }

    pub async fn list_comments(
        &self,
        recipe_id: &str,
        request: PageRequest,
    ) -> Result<Page<Comment>> {
        self.comment_repo().list_for_recipe(recipe_id, request).await
    }
}
