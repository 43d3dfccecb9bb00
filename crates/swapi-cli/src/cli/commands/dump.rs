//! `swapi dump` – print every stored character row.

use anyhow::{Context, Result};
use futures_util::TryStreamExt;
use swapi_core::config::SwapiConfig;
use swapi_core::store::CharacterStore;

pub async fn run_dump(cfg: &SwapiConfig) -> Result<()> {
    let store = CharacterStore::open_default_read_only(cfg)
        .await
        .context("opening characters database read-only (has `swapi load` run?)")?;

    let mut printed = 0u64;
    let result = async {
        let mut rows = std::pin::pin!(store.scan());
        while let Some(row) = rows.try_next().await? {
            println!("{row}");
            printed += 1;
        }
        anyhow::Ok(())
    }
    .await;
    store.close().await;

    tracing::debug!(rows = printed, "dumped characters table");
    result
}
