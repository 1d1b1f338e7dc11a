//! `SeaORM` implementation of the `FeedbackService` trait.

use crate::db::Store;
use crate::domain::{Page, PageRequest};
use crate::models::comment::Comment;
use crate::models::recipe::FeedbackKind;
use crate::services::feedback_service::{FeedbackError, FeedbackService};
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmFeedbackService {
    store: Store,
    comments_per_page: i64,
}

impl SeaOrmFeedbackService {
    #[must_use]
    pub const fn new(store: Store, comments_per_page: i64) -> Self {
        Self {
            store,
            comments_per_page,
        }
    }

    async fn bump(&self, recipe_id: &str, kind: FeedbackKind) -> Result<i32, FeedbackError> {
        let count = self
            .store
            .increment_feedback(recipe_id, kind)
            .await?
            .ok_or_else(|| FeedbackError::RecipeNotFound(recipe_id.to_string()))?;

        metrics::counter!("recipe_feedback_total", "kind" => kind.as_str()).increment(1);
        Ok(count)
    }
}

#[async_trait]
impl FeedbackService for SeaOrmFeedbackService {
    async fn like(&self, recipe_id: &str) -> Result<i32, FeedbackError> {
        self.bump(recipe_id, FeedbackKind::Like).await
    }

    async fn dislike(&self, recipe_id: &str) -> Result<i32, FeedbackError> {
        self.bump(recipe_id, FeedbackKind::Dislike).await
    }

    async fn add_comment(
        &self,
        recipe_id: &str,
        text: Option<&str>,
    ) -> Result<i32, FeedbackError> {
        let text = text
            .filter(|t| !t.is_empty())
            .ok_or(FeedbackError::EmptyComment)?;

        if !self.store.recipe_exists(recipe_id).await? {
            return Err(FeedbackError::RecipeNotFound(recipe_id.to_string()));
        }

        let comment_id = self.store.add_comment(recipe_id, text).await?;
        info!(comment_id, recipe_id, "Comment added");
        metrics::counter!("recipe_feedback_total", "kind" => "comment").increment(1);

        Ok(comment_id)
    }

    async fn list_comments(
        &self,
        recipe_id: &str,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<Page<Comment>, FeedbackError> {
        let request = PageRequest::new(
            page.unwrap_or(1),
            per_page.unwrap_or(self.comments_per_page),
        );

        Ok(self.store.list_comments(recipe_id, request).await?)
    }
}
