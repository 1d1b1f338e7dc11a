use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::validation::{lenient_int, validate_recipe_id};
use super::{
    AddCommentRequest, ApiError, AppState, CommentCreatedResponse, CommentsResponse,
    DislikesResponse, LikesResponse, PageQuery,
};
use crate::services::FeedbackError;

impl From<FeedbackError> for ApiError {
    fn from(err: FeedbackError) -> Self {
        match err {
            FeedbackError::RecipeNotFound(id) => Self::recipe_not_found(&id),
            FeedbackError::EmptyComment => Self::validation(err.to_string()),
            FeedbackError::Database(msg) => Self::internal(msg),
        }
    }
}

/// `POST /api/like/{recipe_id}`
pub async fn like(
    State(state): State<Arc<AppState>>,
    Path(recipe_id): Path<String>,
) -> Result<Json<LikesResponse>, ApiError> {
    let recipe_id = validate_recipe_id(&recipe_id)?;
    let likes = state.feedback_service().like(recipe_id).await?;
    Ok(Json(LikesResponse { likes }))
}

/// `POST /api/dislike/{recipe_id}`
pub async fn dislike(
    State(state): State<Arc<AppState>>,
    Path(recipe_id): Path<String>,
) -> Result<Json<DislikesResponse>, ApiError> {
    let recipe_id = validate_recipe_id(&recipe_id)?;
    let dislikes = state.feedback_service().dislike(recipe_id).await?;
    Ok(Json(DislikesResponse { dislikes }))
}

/// Stores a comment on a recipe.
///
/// # Endpoint
/// `POST /api/add_comment/{recipe_id}` with `{"comment_text": "..."}`
///
/// A body that is missing or not valid JSON is treated like an absent
/// `comment_text`.
///
/// # Errors
/// 400 when the text is absent or blank, 404 when the recipe does not exist.
pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    Path(recipe_id): Path<String>,
    body: Result<Json<AddCommentRequest>, JsonRejection>,
) -> Result<Json<CommentCreatedResponse>, ApiError> {
    let recipe_id = validate_recipe_id(&recipe_id)?;
    let text = body.ok().and_then(|Json(req)| req.comment_text);

    let comment_id = state
        .feedback_service()
        .add_comment(recipe_id, text.as_deref())
        .await?;

    Ok(Json(CommentCreatedResponse { comment_id }))
}

/// `GET /api/get_comments/{recipe_id}`
pub async fn get_comments(
    State(state): State<Arc<AppState>>,
    Path(recipe_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let recipe_id = validate_recipe_id(&recipe_id)?;
    let page = state
        .feedback_service()
        .list_comments(
            recipe_id,
            lenient_int(query.page.as_deref()),
            lenient_int(query.per_page.as_deref()),
        )
        .await?;

    Ok(Json(page.into()))
}
