//! Fetch error type.

use serde_json::Value;
use thiserror::Error;

/// Error returned by a single GET.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection, TLS, reset).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Non-2xx status. `body` is the parsed payload when the server sent JSON.
    #[error("GET {url} returned HTTP {code}")]
    Status {
        url: String,
        code: u32,
        body: Option<Value>,
    },
    /// 2xx status but the body is not JSON.
    #[error("GET {url}: body is not valid JSON: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// The blocking transfer task panicked or was cancelled.
    #[error("GET {url}: transfer task did not complete: {source}")]
    Join {
        url: String,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl FetchError {
    /// JSON payload of an HTTP error response, if any.
    pub fn error_body(&self) -> Option<&Value> {
        match self {
            FetchError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}
