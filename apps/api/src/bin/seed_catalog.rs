//! Pushes the built-in catalog and hobby backgrounds to the configured row store.
//!
//! Idempotent: rows are merged by primary key, so re-running only refreshes them.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use toolkit_api::catalog::builtin::builtin_tools;
use toolkit_api::catalog::row_store::{BackgroundRow, RowStoreClient};
use toolkit_api::catalog::BackgroundTable;
use toolkit_api::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(config.log_filter(&["seed_catalog", "toolkit_api"]))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let row_store = config
        .row_store
        .as_ref()
        .context("SUPABASE_URL and SUPABASE_ANON_KEY must both be set to seed the catalog")?;
    let client = RowStoreClient::new(row_store)?;
    info!("Seeding row store at {}", row_store.url);

    let tools = builtin_tools();
    let seeded_tools = client
        .upsert_tools(&tools)
        .await
        .context("Failed to upsert tools")?;

    let backgrounds = BackgroundTable::builtin();
    let rows: Vec<BackgroundRow> = backgrounds
        .entries()
        .into_iter()
        .flat_map(|(hobby, images)| {
            images.iter().enumerate().map(move |(priority, url)| BackgroundRow {
                hobby: hobby.to_string(),
                image_url: url.clone(),
                priority: priority as u32,
            })
        })
        .collect();
    let seeded_backgrounds = client
        .upsert_backgrounds(&rows)
        .await
        .context("Failed to upsert hobby backgrounds")?;

    info!(
        tools = seeded_tools,
        backgrounds = seeded_backgrounds,
        "Row store seeded"
    );
    Ok(())
}
