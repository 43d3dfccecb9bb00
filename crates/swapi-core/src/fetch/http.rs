//! libcurl-backed `JsonSource`.

use serde_json::Value;
use std::sync::{Arc, Mutex};

use super::{FetchError, JsonSource};

/// Performs JSON GETs with the curl crate.
///
/// All requests go through one `Easy` handle that lives as long as the fetcher,
/// so libcurl's connection cache keeps the API connection alive between GETs.
/// Transfers run on the blocking pool and are awaited one at a time.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    user_agent: String,
    easy: Arc<Mutex<curl::easy::Easy>>,
}

impl HttpFetcher {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            easy: Arc::new(Mutex::new(curl::easy::Easy::new())),
        }
    }

    /// Blocking GET returning `(status, body)`. Follows redirects.
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    pub fn get_blocking(&self, url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut body = Vec::new();

        // Every option is set again after reset(), so a poisoned handle is still usable.
        let mut easy = self.easy.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        // reset() clears options but keeps live connections and the DNS cache.
        easy.reset();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.useragent(&self.user_agent)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl JsonSource for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let fetcher = self.clone();
        let owned_url = url.to_string();
        let joined = tokio::task::spawn_blocking(move || fetcher.get_blocking(&owned_url)).await;

        let (code, body) = match joined {
            Ok(Ok(resp)) => resp,
            Ok(Err(source)) => {
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    source,
                })
            }
            Err(source) => {
                return Err(FetchError::Join {
                    url: url.to_string(),
                    source,
                })
            }
        };
        tracing::debug!(url, code, bytes = body.len(), "GET");

        decode_response(url, code, &body)
    }
}

/// Turn a status code and raw body into parsed JSON or a typed error.
pub(crate) fn decode_response(url: &str, code: u32, body: &[u8]) -> Result<Value, FetchError> {
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
            body: serde_json::from_slice(body).ok(),
        });
    }
    serde_json::from_slice(body).map_err(|source| FetchError::Json {
        url: url.to_string(),
        source,
    })
}
