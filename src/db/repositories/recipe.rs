use crate::domain::RecipeId;
use crate::entities::{prelude::*, recipes};
use crate::models::recipe::{Combination, FeedbackKind, NewRecipe, RecipeSummary};
use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// Serialized `social_media_links` value for a freshly seeded recipe.
const EMPTY_LINKS: &str = "{}";

pub struct RecipeRepository {
    conn: DatabaseConnection,
}

impl RecipeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_summary(m: recipes::Model) -> RecipeSummary {
        RecipeSummary {
            recipe_id: m.recipe_id,
            recipe_name: m.recipe_name,
            recipe_context: m.recipe_context,
            likes: m.likes,
            dislikes: m.dislikes,
        }
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Recipes::find().count(&self.conn).await?)
    }

    pub async fn exists(&self, recipe_id: &str) -> Result<bool> {
        let count = Recipes::find()
            .filter(recipes::Column::RecipeId.eq(recipe_id))
            .count(&self.conn)
            .await?;
        Ok(count > 0)
    }

    /// Inserts one batch of recipes in a single transaction.
    pub async fn insert_batch(&self, batch: Vec<(RecipeId, NewRecipe)>) -> Result<u64> {
        if batch.is_empty() {
            return Ok(0);
        }

        let models = batch.into_iter().map(|(id, r)| recipes::ActiveModel {
            recipe_id: Set(id.into_inner()),
            recipe_name: Set(r.recipe_name),
            recipe_context: Set(r.recipe_context),
            likes: Set(0),
            dislikes: Set(0),
            social_media_links: Set(EMPTY_LINKS.to_string()),
            veg_id: Set(r.veg_id),
            protein_id: Set(r.protein_id),
            flavor_id: Set(r.flavor_id),
        });

        let txn = self.conn.begin().await?;
        let inserted = Recipes::insert_many(models)
            .exec_without_returning(&txn)
            .await?;
        txn.commit().await?;

        Ok(inserted)
    }

    pub async fn find_by_combination(&self, key: Combination) -> Result<Vec<RecipeSummary>> {
        let rows = Recipes::find()
            .filter(recipes::Column::VegId.eq(key.veg_id))
            .filter(recipes::Column::ProteinId.eq(key.protein_id))
            .filter(recipes::Column::FlavorId.eq(key.flavor_id))
            .order_by_asc(recipes::Column::RecipeId)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_summary).collect())
    }

    /// Adds one to the like or dislike counter and returns the new value.
    ///
    /// The increment is a single `SET col = col + 1` statement so concurrent
    /// calls never lose updates. Returns `None` when the recipe does not exist.
    pub async fn increment(&self, recipe_id: &str, kind: FeedbackKind) -> Result<Option<i32>> {
        let column = match kind {
            FeedbackKind::Like => recipes::Column::Likes,
            FeedbackKind::Dislike => recipes::Column::Dislikes,
        };

        let txn = self.conn.begin().await?;

        let result = Recipes::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(recipes::Column::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let recipe = Recipes::find_by_id(recipe_id.to_string()).one(&txn).await?;
        txn.commit().await?;

        Ok(recipe.map(|r| match kind {
            FeedbackKind::Like => r.likes,
            FeedbackKind::Dislike => r.dislikes,
        }))
    }
}
