//! In-memory `JsonSource` for unit tests: canned responses keyed by URL.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

use super::{FetchError, JsonSource};

enum Canned {
    Body(Value),
    Status(u32, Option<Value>),
}

/// Serves fixed responses and records every requested URL in order.
/// Unknown URLs answer HTTP 404 with no body.
#[derive(Default)]
pub(crate) struct CannedSource {
    responses: HashMap<String, Canned>,
    requests: RefCell<Vec<String>>,
}

impl CannedSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), Canned::Body(body));
        self
    }

    pub(crate) fn with_status(mut self, url: &str, code: u32, body: Option<Value>) -> Self {
        self.responses
            .insert(url.to_string(), Canned::Status(code, body));
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl JsonSource for CannedSource {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.responses.get(url) {
            Some(Canned::Body(v)) => Ok(v.clone()),
            Some(Canned::Status(code, body)) => Err(FetchError::Status {
                url: url.to_string(),
                code: *code,
                body: body.clone(),
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                code: 404,
                body: None,
            }),
        }
    }
}
