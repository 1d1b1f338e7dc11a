use serde::{Deserialize, Serialize};

use crate::domain::Page;
use crate::models::catalog::{Flavor, Protein, Vegetable};
use crate::models::comment::Comment;
use crate::models::recipe::RecipeSummary;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// `page` / `per_page` exactly as sent. Values that do not parse as integers
/// fall back to the endpoint defaults.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListingResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub pages: u64,
    pub current_page: i64,
}

impl<S, T: From<S>> From<Page<S>> for ListingResponse<T> {
    fn from(page: Page<S>) -> Self {
        let page = page.map(T::from);
        Self {
            items: page.items,
            total: page.total,
            pages: page.pages,
            current_page: page.current_page,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VegetableDto {
    pub veg_id: i32,
    pub veg_name: String,
    pub veg_type_name: String,
}

impl From<Vegetable> for VegetableDto {
    fn from(v: Vegetable) -> Self {
        Self {
            veg_id: v.veg_id,
            veg_name: v.veg_name,
            veg_type_name: v.veg_type_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProteinDto {
    pub protein_id: i32,
    pub protein_name: String,
    pub protein_type_name: String,
}

impl From<Protein> for ProteinDto {
    fn from(p: Protein) -> Self {
        Self {
            protein_id: p.protein_id,
            protein_name: p.protein_name,
            protein_type_name: p.protein_type_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FlavorDto {
    pub flavor_id: i32,
    pub flavor_type: String,
}

impl From<Flavor> for FlavorDto {
    fn from(f: Flavor) -> Self {
        Self {
            flavor_id: f.flavor_id,
            flavor_type: f.flavor_type,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindRecipesQuery {
    pub veg_id: Option<String>,
    pub protein_id: Option<String>,
    pub flavor_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecipeDto {
    pub recipe_id: String,
    pub recipe_name: String,
    pub recipe_context: String,
    pub likes: i32,
    pub dislikes: i32,
}

impl From<RecipeSummary> for RecipeDto {
    fn from(r: RecipeSummary) -> Self {
        Self {
            recipe_id: r.recipe_id,
            recipe_name: r.recipe_name,
            recipe_context: r.recipe_context,
            likes: r.likes,
            dislikes: r.dislikes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecipesResponse {
    pub recipes: Vec<RecipeDto>,
}

#[derive(Debug, Serialize)]
pub struct LikesResponse {
    pub likes: i32,
}

#[derive(Debug, Serialize)]
pub struct DislikesResponse {
    pub dislikes: i32,
}

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub comment_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CommentCreatedResponse {
    pub comment_id: i32,
}

#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub comment_id: i32,
    pub comment_text: String,
}

impl From<Comment> for CommentDto {
    fn from(c: Comment) -> Self {
        Self {
            comment_id: c.comment_id,
            comment_text: c.comment_text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentDto>,
    pub total: u64,
    pub pages: u64,
    pub current_page: i64,
}

impl From<Page<Comment>> for CommentsResponse {
    fn from(page: Page<Comment>) -> Self {
        let page = page.map(CommentDto::from);
        Self {
            comments: page.items,
            total: page.total,
            pages: page.pages,
            current_page: page.current_page,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
