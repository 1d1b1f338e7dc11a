use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::{ApiError, AppState, FindRecipesQuery, RecipeDto, RecipesResponse};
use crate::services::{RecipeError, RecipeQuery};

impl From<RecipeError> for ApiError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::MissingParameter(_) => Self::validation(err.to_string()),
            RecipeError::NoMatch => Self::NoMatch(err.to_string()),
            RecipeError::Database(msg) => Self::internal(msg),
        }
    }
}

/// Looks up recipes for an exact (vegetable, protein, flavor) combination.
///
/// # Endpoint
/// `GET /api/find_recipes?veg_id=..&protein_id=..&flavor_id=..`
///
/// # Errors
/// 400 for the first missing parameter, 404 with a `message` body when
/// nothing matches.
pub async fn find_recipes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FindRecipesQuery>,
) -> Result<Json<RecipesResponse>, ApiError> {
    let query = RecipeQuery {
        veg_id: query.veg_id,
        protein_id: query.protein_id,
        flavor_id: query.flavor_id,
    };

    let recipes = state.recipe_service().find(query).await?;

    Ok(Json(RecipesResponse {
        recipes: recipes.into_iter().map(RecipeDto::from).collect(),
    }))
}
