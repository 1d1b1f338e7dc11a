//! `SeaORM` implementation of the `RecipeService` trait.

use crate::db::Store;
use crate::models::recipe::RecipeSummary;
use crate::services::recipe_service::{RecipeError, RecipeQuery, RecipeService};
use async_trait::async_trait;
use tracing::debug;

pub struct SeaOrmRecipeService {
    store: Store,
}

impl SeaOrmRecipeService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecipeService for SeaOrmRecipeService {
    async fn find(&self, query: RecipeQuery) -> Result<Vec<RecipeSummary>, RecipeError> {
        let key = query.combination()?;

        let recipes = self.store.find_recipes(key).await?;
        if recipes.is_empty() {
            debug!(
                veg_id = key.veg_id,
                protein_id = key.protein_id,
                flavor_id = key.flavor_id,
                "No recipe for combination"
            );
            return Err(RecipeError::NoMatch);
        }

        Ok(recipes)
    }
}
