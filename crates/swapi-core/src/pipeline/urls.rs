use url::Url;

use super::PipelineError;
use crate::record::CharacterId;

/// API endpoints derived from the configured root.
#[derive(Debug, Clone)]
pub struct Endpoints {
    people: Url,
}

impl Endpoints {
    /// `api_root` may or may not end in `/`.
    pub fn new(api_root: &str) -> Result<Self, PipelineError> {
        let invalid = |source| PipelineError::InvalidApiRoot {
            root: api_root.to_string(),
            source,
        };
        let base = Url::parse(&format!("{}/", api_root.trim_end_matches('/'))).map_err(invalid)?;
        let people = base.join("people/").map_err(invalid)?;
        Ok(Self { people })
    }

    /// Collection root: `<api_root>/people/`.
    pub fn people(&self) -> &str {
        self.people.as_str()
    }

    /// One character: `<api_root>/people/<id>/`.
    pub fn character(&self, id: CharacterId) -> String {
        format!("{}{}/", self.people, id)
    }
}
