use thiserror::Error;

use crate::fetch::FetchError;

/// Why a character record could not be built. No partial record is ever returned.
#[derive(Debug, Error)]
pub enum RecordError {
    /// URL does not end in `.../<digits>/`.
    #[error("cannot extract character id from URL {0:?}")]
    MalformedUrl(String),
    /// Raw character payload is not a JSON object.
    #[error("character payload from {url} is not a JSON object")]
    NotAnObject { url: String },
    /// A reference field is present but is not a list of URLs.
    #[error("field {field:?} is not a list of URLs")]
    NotAList { field: &'static str },
    /// Referenced resource lacks the string field we display.
    #[error("resource {url} has no string field {field:?}")]
    MissingField { url: String, field: &'static str },
    /// Fetching a referenced resource failed.
    #[error("resolving {field:?} reference")]
    Fetch {
        field: &'static str,
        #[source]
        source: FetchError,
    },
}
