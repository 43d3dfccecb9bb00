//! `swapi load` – run the ETL pipeline against the configured API.

use anyhow::{Context, Result};
use swapi_core::config::SwapiConfig;
use swapi_core::fetch::HttpFetcher;
use swapi_core::pipeline::run_pipeline;
use swapi_core::store::CharacterStore;

pub async fn run_load(cfg: &SwapiConfig, clear: bool) -> Result<()> {
    let store = CharacterStore::open_default(cfg)
        .await
        .context("opening characters database")?;

    // Close the pool on both paths before reporting.
    let result = load_into(&store, cfg, clear).await;
    store.close().await;
    result
}

async fn load_into(store: &CharacterStore, cfg: &SwapiConfig, clear: bool) -> Result<()> {
    if clear {
        let removed = store.clear().await?;
        tracing::info!(removed, "cleared characters table");
    }

    let fetcher = HttpFetcher::new(cfg.user_agent.clone());
    let summary = run_pipeline(&fetcher, store, &cfg.api_root)
        .await
        .with_context(|| format!("loading characters from {}", cfg.api_root))?;

    println!(
        "Loaded {} of {} characters ({} not found)",
        summary.built, summary.total, summary.skipped
    );
    Ok(())
}
