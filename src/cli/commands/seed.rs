//! Seed command handler

use std::path::PathBuf;

use crate::config::Config;
use crate::db::Store;
use crate::seed::{Datasets, SeedLoader, SeedOutcome};

pub async fn cmd_seed(
    config: &Config,
    dataset_dir: Option<PathBuf>,
    batch_size: Option<usize>,
) -> anyhow::Result<()> {
    let dir = dataset_dir.unwrap_or_else(|| PathBuf::from(&config.seed.dataset_dir));
    let batch_size = batch_size.unwrap_or(config.seed.batch_size);

    let store = Store::new(&config.general.database_path).await?;
    let datasets = Datasets::load_from_dir(&dir)?;
    let report = SeedLoader::new(store, batch_size).seed(datasets).await?;

    println!("Seeded from {}", dir.display());
    println!("{:-<40}", "");
    for (table, outcome) in [
        ("veg_raw", report.vegetables),
        ("protein_raw", report.proteins),
        ("flavor_raw", report.flavors),
        ("recipes", report.recipes),
    ] {
        match outcome {
            SeedOutcome::Inserted(n) => println!("{table:<12} {n} rows inserted"),
            SeedOutcome::Skipped => println!("{table:<12} already populated, skipped"),
        }
    }

    Ok(())
}
