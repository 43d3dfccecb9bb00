//! JSON over HTTP GET.
//!
//! `JsonSource` is the one I/O seam the record builder and the pipeline are
//! generic over. `HttpFetcher` implements it with libcurl.

mod error;
mod http;

use serde_json::Value;

pub use error::FetchError;
pub use http::HttpFetcher;

/// Something that can GET a URL and hand back the parsed JSON body.
#[allow(async_fn_in_trait)]
pub trait JsonSource {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

#[cfg(test)]
pub(crate) mod canned;
