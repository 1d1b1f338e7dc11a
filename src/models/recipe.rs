use serde::{Deserialize, Serialize};

/// A recipe row ready for insertion, minus its generated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub recipe_name: String,
    pub recipe_context: String,
    pub veg_id: Option<i32>,
    pub protein_id: Option<i32>,
    pub flavor_id: Option<i32>,
}

/// The fields a recipe lookup returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub recipe_id: String,
    pub recipe_name: String,
    pub recipe_context: String,
    pub likes: i32,
    pub dislikes: i32,
}

/// The (vegetable, protein, flavor) key a recipe lookup matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    pub veg_id: i32,
    pub protein_id: i32,
    pub flavor_id: i32,
}

/// Which counter a feedback call bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Like,
    Dislike,
}

impl FeedbackKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}
