use super::fetch_page;
use crate::domain::{Page, PageRequest};
use crate::entities::{comments, prelude::*};
use crate::models::comment::Comment;
use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;

pub struct CommentRepository {
    conn: DatabaseConnection,
}

impl CommentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn add(&self, recipe_id: &str, text: &str) -> Result<i32> {
        let active_model = comments::ActiveModel {
            recipe_id: Set(recipe_id.to_string()),
            comment_text: Set(text.to_string()),
            ..Default::default()
        };

        let res = Comments::insert(active_model).exec(&self.conn).await?;
        debug!(
            "Added comment {} to recipe {}",
            res.last_insert_id, recipe_id
        );
        Ok(res.last_insert_id)
    }

    pub async fn list_for_recipe(
        &self,
        recipe_id: &str,
        request: PageRequest,
    ) -> Result<Page<Comment>> {
        let select = Comments::find()
            .filter(comments::Column::RecipeId.eq(recipe_id))
            .order_by_asc(comments::Column::CommentId);

        let page = fetch_page(&self.conn, select, request).await?;

        Ok(page.map(|m| Comment {
            comment_id: m.comment_id,
            comment_text: m.comment_text,
        }))
    }
}
