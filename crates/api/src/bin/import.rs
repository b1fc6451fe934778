//! Bulk recipe import.
//!
//! Loads a JSON file of recipe objects into the catalog database. The file
//! may hold either an array of recipes or an object whose values are
//! recipes. Numeric fields are normalized on the way in; records without a
//! title are skipped and reported.

use std::path::PathBuf;

use anyhow::{bail, Context};
use catalog_api::config::DatabaseConfig;
use catalog_core::recipe::{NewRecipe, RecipeInput};
use catalog_db::repositories::{PgRecipeStore, RecipeRepo};
use catalog_db::store::RecipeStore;
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "catalog-import", about = "Import recipes from a JSON file")]
struct Args {
    /// Path to the JSON file to import.
    #[arg(default_value = "data/recipes.json")]
    file: PathBuf,

    /// Delete every existing recipe before importing.
    #[arg(long)]
    reset: bool,
}

/// Per-run import counters.
#[derive(Debug, Default)]
struct ImportReport {
    imported: usize,
    skipped: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_import=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    if raw.trim().is_empty() {
        bail!("{} is empty", args.file.display());
    }
    let records = parse_records(&raw)?;
    tracing::info!(file = %args.file.display(), count = records.len(), "Loaded import file");

    let db_config = DatabaseConfig::from_env();
    let pool = catalog_db::create_pool(&db_config.url, db_config.max_connections)
        .await
        .context("Failed to connect to database")?;
    catalog_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    if args.reset {
        RecipeRepo::clear(&pool)
            .await
            .context("Failed to clear recipes")?;
        tracing::info!("Existing recipes removed");
    }

    let store = PgRecipeStore::new(pool.clone());
    let report = import(&store, records).await?;

    tracing::info!(
        imported = report.imported,
        skipped = report.skipped,
        "Import finished",
    );
    pool.close().await;
    Ok(())
}

/// Accept a top-level array, or an object whose values are the records.
fn parse_records(raw: &str) -> anyhow::Result<Vec<Value>> {
    match serde_json::from_str::<Value>(raw).context("Import file is not valid JSON")? {
        Value::Array(items) => Ok(items),
        Value::Object(map) => Ok(map.into_iter().map(|(_, v)| v).collect()),
        other => bail!("Expected a JSON array or object of recipes, found {other}"),
    }
}

/// Create each record in turn. Invalid records are skipped; a store
/// failure aborts the run.
async fn import(store: &dyn RecipeStore, records: Vec<Value>) -> anyhow::Result<ImportReport> {
    let mut report = ImportReport::default();

    for (index, value) in records.into_iter().enumerate() {
        let recipe = serde_json::from_value::<RecipeInput>(value)
            .map_err(|e| e.to_string())
            .and_then(|input| NewRecipe::try_from(input).map_err(|e| e.to_string()));

        match recipe {
            Ok(recipe) => {
                store
                    .create(&recipe)
                    .await
                    .with_context(|| format!("Failed to insert record {index}"))?;
                report.imported += 1;
            }
            Err(reason) => {
                tracing::warn!(index, %reason, "Skipping record");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}
