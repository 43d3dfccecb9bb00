use thiserror::Error;

use crate::fetch::FetchError;
use crate::record::{CharacterId, RecordError};
use crate::store::StoreError;

/// Anything that aborts a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid API root {root:?}: {source}")]
    InvalidApiRoot {
        root: String,
        #[source]
        source: url::ParseError,
    },
    #[error("fetching character count")]
    Count(#[source] FetchError),
    #[error("response from {url} has no integer \"count\"")]
    MissingCount { url: String },
    #[error("fetching character {id}")]
    Fetch {
        id: CharacterId,
        #[source]
        source: FetchError,
    },
    #[error("building character {id}")]
    Build {
        id: CharacterId,
        #[source]
        source: RecordError,
    },
    #[error("storing character {id}")]
    Store {
        id: CharacterId,
        #[source]
        source: StoreError,
    },
}
