use serde_json::Value;

use super::{is_not_found, Endpoints, PipelineError};
use crate::fetch::JsonSource;
use crate::record::{build_record, CharacterId};
use crate::store::CharacterStore;

/// Outcome of one `iterating(i)` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// API answered with the "not found" sentinel; nothing written.
    Skipped(CharacterId),
    /// Record built and committed.
    Built(CharacterId),
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    /// `count` reported by the collection root.
    pub total: i64,
    pub built: u64,
    pub skipped: u64,
}

/// One ETL run over a JSON source and a store.
pub struct Pipeline<'a, S> {
    source: &'a S,
    store: &'a CharacterStore,
    endpoints: Endpoints,
}

impl<'a, S: JsonSource> Pipeline<'a, S> {
    pub fn new(
        source: &'a S,
        store: &'a CharacterStore,
        api_root: &str,
    ) -> Result<Self, PipelineError> {
        Ok(Self {
            source,
            store,
            endpoints: Endpoints::new(api_root)?,
        })
    }

    /// `counting`: read `count` from the collection root. Negative counts read as 0.
    pub async fn count(&self) -> Result<i64, PipelineError> {
        let url = self.endpoints.people();
        let body = self
            .source
            .get_json(url)
            .await
            .map_err(PipelineError::Count)?;
        // A negative count is an empty range, not an error.
        body.get("count")
            .and_then(Value::as_i64)
            .map(|n| n.max(0))
            .ok_or_else(|| PipelineError::MissingCount {
                url: url.to_string(),
            })
    }

    /// `iterating(id)`: fetch the character, then skip it or build and insert it.
    pub async fn process(&self, id: CharacterId) -> Result<Step, PipelineError> {
        let url = self.endpoints.character(id);
        let raw = match self.source.get_json(&url).await {
            Ok(body) if is_not_found(&body) => return Ok(Step::Skipped(id)),
            Ok(body) => body,
            // The real API sends the sentinel with a 404.
            Err(e) if e.error_body().is_some_and(is_not_found) => return Ok(Step::Skipped(id)),
            Err(source) => return Err(PipelineError::Fetch { id, source }),
        };

        let record = build_record(self.source, &raw, &url)
            .await
            .map_err(|source| PipelineError::Build { id, source })?;
        self.store
            .insert(&record)
            .await
            .map_err(|source| PipelineError::Store { id, source })?;
        Ok(Step::Built(record.id))
    }

    /// Run `counting` then `iterating(1..=N)` to `done`. Stops at the first error.
    pub async fn run(&self) -> Result<PipelineSummary, PipelineError> {
        let total = self.count().await?;
        tracing::info!(total, url = self.endpoints.people(), "character count");

        let mut summary = PipelineSummary {
            total,
            ..PipelineSummary::default()
        };
        for id in 1..=total {
            match self.process(id).await {
                Ok(Step::Built(_)) => {
                    summary.built += 1;
                    tracing::debug!(id, "built");
                }
                Ok(Step::Skipped(_)) => {
                    summary.skipped += 1;
                    tracing::debug!(id, "not found, skipped");
                }
                Err(e) => {
                    tracing::error!(id, error = ?e, "aborting run");
                    return Err(e);
                }
            }
        }

        tracing::info!(
            total = summary.total,
            built = summary.built,
            skipped = summary.skipped,
            "pipeline done"
        );
        Ok(summary)
    }
}

/// Convenience wrapper: build a `Pipeline` and run it.
pub async fn run_pipeline<S: JsonSource>(
    source: &S,
    store: &CharacterStore,
    api_root: &str,
) -> Result<PipelineSummary, PipelineError> {
    Pipeline::new(source, store, api_root)?.run().await
}
