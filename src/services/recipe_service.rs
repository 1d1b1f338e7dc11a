//! Domain service for recipe lookup.
//!
//! A lookup matches recipes on the exact (vegetable, protein, flavor)
//! combination. All three keys are required.

use crate::models::recipe::{Combination, RecipeSummary};
use thiserror::Error;

/// Errors specific to recipe lookup.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("missing {0}")]
    MissingParameter(&'static str),

    #[error("no matching recipes found")]
    NoMatch,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for RecipeError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for RecipeError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Raw lookup parameters as they arrive from the caller.
#[derive(Debug, Clone, Default)]
pub struct RecipeQuery {
    pub veg_id: Option<String>,
    pub protein_id: Option<String>,
    pub flavor_id: Option<String>,
}

impl RecipeQuery {
    /// Validates the parameters in the order vegetable, protein, flavor and
    /// reports only the first one that is absent or empty.
    ///
    /// A present value that is not an integral number can never equal an
    /// integer key, so it yields [`RecipeError::NoMatch`] rather than a
    /// client error.
    pub fn combination(&self) -> Result<Combination, RecipeError> {
        let veg = required("veg_id", self.veg_id.as_deref())?;
        let protein = required("protein_id", self.protein_id.as_deref())?;
        let flavor = required("flavor_id", self.flavor_id.as_deref())?;

        Ok(Combination {
            veg_id: parse_id(veg).ok_or(RecipeError::NoMatch)?,
            protein_id: parse_id(protein).ok_or(RecipeError::NoMatch)?,
            flavor_id: parse_id(flavor).ok_or(RecipeError::NoMatch)?,
        })
    }
}

fn required<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str, RecipeError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RecipeError::MissingParameter(name)),
    }
}

/// Reads a key the way SQLite compares text against an INTEGER column:
/// surrounding whitespace is ignored and integral reals such as `1.0` count.
#[allow(clippy::cast_possible_truncation)]
fn parse_id(value: &str) -> Option<i32> {
    let value = value.trim();
    if let Ok(id) = value.parse::<i32>() {
        return Some(id);
    }

    let real: f64 = value.parse().ok()?;
    let in_range = real.is_finite()
        && real.fract() == 0.0
        && real >= f64::from(i32::MIN)
        && real <= f64::from(i32::MAX);
    in_range.then_some(real as i32)
}

/// Domain service trait for recipe lookup.
#[async_trait::async_trait]
pub trait RecipeService: Send + Sync {
    /// Finds every recipe whose vegetable, protein and flavor all equal the
    /// requested ones.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::MissingParameter`] for the first absent key and
    /// [`RecipeError::NoMatch`] when nothing matches, non-numeric keys included.
    async fn find(&self, query: RecipeQuery) -> Result<Vec<RecipeSummary>, RecipeError>;
}
