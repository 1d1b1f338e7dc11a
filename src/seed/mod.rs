//! One-shot population of the database from the bundled datasets.
//!
//! Each table is handled on its own: a table that already holds any row is
//! skipped entirely, an empty one receives the whole dataset in fixed-size
//! batches, one transaction per batch. The loader takes no locks and must not
//! run alongside live traffic or another seed run.

pub mod dataset;

pub use dataset::{Datasets, RawFlavor, RawProtein, RawRecipe, RawVegetable};

use crate::db::Store;
use crate::domain::RecipeId;
use crate::models::recipe::NewRecipe;
use anyhow::{Context, Result};
use std::collections::HashSet;
use tracing::info;

/// What happened to one table during a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(u64),
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub vegetables: SeedOutcome,
    pub proteins: SeedOutcome,
    pub flavors: SeedOutcome,
    pub recipes: SeedOutcome,
}

pub struct SeedLoader {
    store: Store,
    batch_size: usize,
}

impl SeedLoader {
    #[must_use]
    pub fn new(store: Store, batch_size: usize) -> Self {
        Self {
            store,
            batch_size: batch_size.max(1),
        }
    }

    pub async fn seed(&self, datasets: Datasets) -> Result<SeedReport> {
        let report = SeedReport {
            vegetables: self.seed_vegetables(datasets.vegetables).await?,
            proteins: self.seed_proteins(datasets.proteins).await?,
            flavors: self.seed_flavors(datasets.flavors).await?,
            recipes: self.seed_recipes(datasets.recipes).await?,
        };

        info!("Database seeding finished: {:?}", report);
        Ok(report)
    }

    async fn seed_vegetables(&self, raw: Option<Vec<RawVegetable>>) -> Result<SeedOutcome> {
        if self.store.count_vegetables().await? > 0 {
            info!("veg_raw already has data, skipping");
            return Ok(SeedOutcome::Skipped);
        }

        let records = dataset::vegetables(require_dataset(raw, dataset::VEGETABLES_FILE)?)?;

        let mut inserted = 0;
        for batch in records.chunks(self.batch_size) {
            inserted += self
                .store
                .insert_vegetables(batch)
                .await
                .context("Failed to insert vegetable batch")?;
        }

        info!("Inserted {} vegetables", inserted);
        Ok(SeedOutcome::Inserted(inserted))
    }

    async fn seed_proteins(&self, raw: Option<Vec<RawProtein>>) -> Result<SeedOutcome> {
        if self.store.count_proteins().await? > 0 {
            info!("protein_raw already has data, skipping");
            return Ok(SeedOutcome::Skipped);
        }

        let records = dataset::proteins(require_dataset(raw, dataset::PROTEINS_FILE)?)?;

        let mut inserted = 0;
        for batch in records.chunks(self.batch_size) {
            inserted += self
                .store
                .insert_proteins(batch)
                .await
                .context("Failed to insert protein batch")?;
        }

        info!("Inserted {} proteins", inserted);
        Ok(SeedOutcome::Inserted(inserted))
    }

    async fn seed_flavors(&self, raw: Option<Vec<RawFlavor>>) -> Result<SeedOutcome> {
        if self.store.count_flavors().await? > 0 {
            info!("flavor_raw already has data, skipping");
            return Ok(SeedOutcome::Skipped);
        }

        let records = dataset::flavors(require_dataset(raw, dataset::FLAVORS_FILE)?)?;

        let mut inserted = 0;
        for batch in records.chunks(self.batch_size) {
            inserted += self
                .store
                .insert_flavors(batch)
                .await
                .context("Failed to insert flavor batch")?;
        }

        info!("Inserted {} flavors", inserted);
        Ok(SeedOutcome::Inserted(inserted))
    }

    async fn seed_recipes(&self, raw: Option<Vec<RawRecipe>>) -> Result<SeedOutcome> {
        if self.store.count_recipes().await? > 0 {
            info!("recipes already has data, skipping");
            return Ok(SeedOutcome::Skipped);
        }

        let records = dataset::recipes(require_dataset(raw, dataset::RECIPES_FILE)?)?;

        // The table is empty here, so ids only have to be unique within this run.
        let mut taken = HashSet::new();
        let mut inserted = 0;
        for batch in records.chunks(self.batch_size) {
            let rows: Vec<(RecipeId, NewRecipe)> = batch
                .iter()
                .map(|recipe| (fresh_id(&mut taken), recipe.clone()))
                .collect();

            inserted += self
                .store
                .insert_recipes(rows)
                .await
                .context("Failed to insert recipe batch")?;
        }

        info!("Inserted {} recipes", inserted);
        Ok(SeedOutcome::Inserted(inserted))
    }
}

fn fresh_id(taken: &mut HashSet<String>) -> RecipeId {
    loop {
        let id = RecipeId::generate();
        if taken.insert(id.as_str().to_string()) {
            return id;
        }
    }
}

fn require_dataset<T>(rows: Option<Vec<T>>, file: &str) -> Result<Vec<T>> {
    rows.with_context(|| format!("Dataset {file} is required to seed an empty table"))
}
