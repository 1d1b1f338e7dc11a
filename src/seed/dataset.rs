//! Dataset files and their mapping onto typed records.
//!
//! Rows arrive loosely typed (spreadsheet exports turn integers into floats or
//! strings, optional cells go missing). Each row is validated into a typed
//! record before anything touches the database.

use crate::models::catalog::{Flavor, Protein, Vegetable};
use crate::models::recipe::NewRecipe;
use anyhow::{Context, Result};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use thiserror::Error;

pub const VEGETABLES_FILE: &str = "veg_raw.json";
pub const PROTEINS_FILE: &str = "protein_raw.json";
pub const FLAVORS_FILE: &str = "flavor_raw.json";
pub const RECIPES_FILE: &str = "recipes.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("{dataset} row {row}: missing required field '{field}'")]
    MissingField {
        dataset: &'static str,
        row: usize,
        field: &'static str,
    },
}

/// The four source datasets. `None` means the file was not provided.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub vegetables: Option<Vec<RawVegetable>>,
    pub proteins: Option<Vec<RawProtein>>,
    pub flavors: Option<Vec<RawFlavor>>,
    pub recipes: Option<Vec<RawRecipe>>,
}

impl Datasets {
    /// Reads every dataset file present in `dir`. Missing files are left as
    /// `None`; unreadable or malformed files are errors.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Ok(Self {
            vegetables: read_json(&dir.join(VEGETABLES_FILE))?,
            proteins: read_json(&dir.join(PROTEINS_FILE))?,
            flavors: read_json(&dir.join(FLAVORS_FILE))?,
            recipes: read_json(&dir.join(RECIPES_FILE))?,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;

    let rows = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse dataset: {}", path.display()))?;

    Ok(Some(rows))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVegetable {
    #[serde(default, deserialize_with = "lenient_id")]
    pub veg_id: Option<i32>,
    #[serde(default)]
    pub veg_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub veg_type_id: Option<i32>,
    #[serde(default)]
    pub veg_type_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProtein {
    #[serde(default, deserialize_with = "lenient_id")]
    pub protein_id: Option<i32>,
    #[serde(default)]
    pub protein_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub protein_type_id: Option<i32>,
    #[serde(default)]
    pub protein_type_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFlavor {
    #[serde(default, deserialize_with = "lenient_id")]
    pub flavor_id: Option<i32>,
    #[serde(default)]
    pub flavor_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecipe {
    #[serde(default)]
    pub recipe_name: Option<String>,
    #[serde(default)]
    pub recipe_context: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub veg_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub protein_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub flavor_id: Option<i32>,
}

fn require<T>(
    value: Option<T>,
    dataset: &'static str,
    row: usize,
    field: &'static str,
) -> Result<T, DatasetError> {
    value.ok_or(DatasetError::MissingField {
        dataset,
        row,
        field,
    })
}

/// Every field is required.
pub fn vegetables(raw: Vec<RawVegetable>) -> Result<Vec<Vegetable>, DatasetError> {
    const DATASET: &str = VEGETABLES_FILE;
    raw.into_iter()
        .enumerate()
        .map(|(row, r)| {
            Ok(Vegetable {
                veg_id: require(r.veg_id, DATASET, row, "veg_id")?,
                veg_name: require(r.veg_name, DATASET, row, "veg_name")?,
                veg_type_id: require(r.veg_type_id, DATASET, row, "veg_type_id")?,
                veg_type_name: require(r.veg_type_name, DATASET, row, "veg_type_name")?,
            })
        })
        .collect()
}

/// Every field is required.
pub fn proteins(raw: Vec<RawProtein>) -> Result<Vec<Protein>, DatasetError> {
    const DATASET: &str = PROTEINS_FILE;
    raw.into_iter()
        .enumerate()
        .map(|(row, r)| {
            Ok(Protein {
                protein_id: require(r.protein_id, DATASET, row, "protein_id")?,
                protein_name: require(r.protein_name, DATASET, row, "protein_name")?,
                protein_type_id: require(r.protein_type_id, DATASET, row, "protein_type_id")?,
                protein_type_name: require(
                    r.protein_type_name,
                    DATASET,
                    row,
                    "protein_type_name",
                )?,
            })
        })
        .collect()
}

/// Every field is required.
pub fn flavors(raw: Vec<RawFlavor>) -> Result<Vec<Flavor>, DatasetError> {
    const DATASET: &str = FLAVORS_FILE;
    raw.into_iter()
        .enumerate()
        .map(|(row, r)| {
            Ok(Flavor {
                flavor_id: require(r.flavor_id, DATASET, row, "flavor_id")?,
                flavor_type: require(r.flavor_type, DATASET, row, "flavor_type")?,
            })
        })
        .collect()
}

/// Only `recipe_name` is required. A missing description becomes the empty
/// string and missing ingredient ids stay unset.
pub fn recipes(raw: Vec<RawRecipe>) -> Result<Vec<NewRecipe>, DatasetError> {
    raw.into_iter()
        .enumerate()
        .map(|(row, r)| {
            Ok(NewRecipe {
                recipe_name: require(r.recipe_name, RECIPES_FILE, row, "recipe_name")?,
                recipe_context: r.recipe_context.unwrap_or_default(),
                veg_id: r.veg_id,
                protein_id: r.protein_id,
                flavor_id: r.flavor_id,
            })
        })
        .collect()
}

/// Accepts an id written as an integer, an integral float (`3.0`), a numeric
/// string, null, or an empty string.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    let id = match value {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral)),
        Some(serde_json::Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        Some(other) => {
            return Err(de::Error::custom(format!("expected an id, found {other}")));
        }
    };

    id.and_then(|n| i32::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| de::Error::custom("id is not an integer in i32 range"))
}

#[allow(clippy::cast_possible_truncation)]
fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= f64::from(i32::MAX)).then_some(f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_accept_spreadsheet_shapes() {
        let rows: Vec<RawRecipe> = serde_json::from_str(
            r#"[
                {"recipe_name": "a", "veg_id": 1, "protein_id": 2.0, "flavor_id": "3"},
                {"recipe_name": "b", "veg_id": null, "protein_id": "", "flavor_id": " 4 "}
            ]"#,
        )
        .unwrap();

        assert_eq!(rows[0].veg_id, Some(1));
        assert_eq!(rows[0].protein_id, Some(2));
        assert_eq!(rows[0].flavor_id, Some(3));
        assert_eq!(rows[1].veg_id, None);
        assert_eq!(rows[1].protein_id, None);
        assert_eq!(rows[1].flavor_id, Some(4));
    }

    #[test]
    fn fractional_id_is_rejected() {
        let result: Result<Vec<RawFlavor>, _> =
            serde_json::from_str(r#"[{"flavor_id": 1.5, "flavor_type": "Spicy"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn recipe_defaults() {
        let raw = vec![RawRecipe {
            recipe_name: Some("Cabbage Tofu".to_string()),
            ..Default::default()
        }];

        let records = recipes(raw).unwrap();
        assert_eq!(records[0].recipe_context, "");
        assert_eq!(records[0].veg_id, None);
    }

    #[test]
    fn missing_required_field_names_row() {
        let raw = vec![
            RawFlavor {
                flavor_id: Some(1),
                flavor_type: Some("Spicy".to_string()),
            },
            RawFlavor {
                flavor_id: Some(2),
                flavor_type: None,
            },
        ];

        let err = flavors(raw).unwrap_err();
        assert_eq!(
            err,
            DatasetError::MissingField {
                dataset: FLAVORS_FILE,
                row: 1,
                field: "flavor_type",
            }
        );
    }

    #[test]
    fn recipe_without_name_is_rejected() {
        let raw = vec![RawRecipe {
            veg_id: Some(1),
            ..Default::default()
        }];
        assert!(recipes(raw).is_err());
    }
}
