//! Domain service for user feedback on recipes.
//!
//! Handles like/dislike counters and free-text comments. Counters only ever
//! grow and there is no per-user deduplication.

use crate::domain::Page;
use crate::models::comment::Comment;
use thiserror::Error;

/// Errors specific to feedback operations.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("comment_text must not be empty")]
    EmptyComment,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for FeedbackError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for FeedbackError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for feedback.
#[async_trait::async_trait]
pub trait FeedbackService: Send + Sync {
    /// Adds one like and returns the new like count.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::RecipeNotFound`] if the recipe doesn't exist.
    async fn like(&self, recipe_id: &str) -> Result<i32, FeedbackError>;

    /// Adds one dislike and returns the new dislike count.
    async fn dislike(&self, recipe_id: &str) -> Result<i32, FeedbackError>;

    /// Stores a comment and returns its new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::EmptyComment`] when `text` is absent or empty
    /// and [`FeedbackError::RecipeNotFound`] when the recipe doesn't exist.
    /// Nothing is written in either case.
    async fn add_comment(&self, recipe_id: &str, text: Option<&str>)
    -> Result<i32, FeedbackError>;

    /// Lists one page of a recipe's comments, oldest first.
    ///
    /// An unknown recipe yields an empty page rather than an error.
    async fn list_comments(
        &self,
        recipe_id: &str,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<Page<Comment>, FeedbackError>;
}
