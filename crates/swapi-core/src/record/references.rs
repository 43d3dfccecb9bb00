//! Reference-list fields and their sequential resolution.

use serde_json::{Map, Value};

use super::RecordError;
use crate::fetch::JsonSource;

/// Separator between resolved names in a flattened column.
pub const JOIN_SEPARATOR: &str = ", ";

/// A character attribute holding URLs of related resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceField {
    Films,
    Species,
    Starships,
    Vehicles,
}

impl ReferenceField {
    /// Resolution order.
    pub const ALL: [ReferenceField; 4] = [
        ReferenceField::Films,
        ReferenceField::Species,
        ReferenceField::Starships,
        ReferenceField::Vehicles,
    ];

    /// Key in the raw character object (and column name).
    pub fn key(self) -> &'static str {
        match self {
            ReferenceField::Films => "films",
            ReferenceField::Species => "species",
            ReferenceField::Starships => "starships",
            ReferenceField::Vehicles => "vehicles",
        }
    }

    /// Field read from each referenced resource.
    pub fn display_field(self) -> &'static str {
        match self {
            ReferenceField::Films => "title",
            _ => "name",
        }
    }

    /// URLs listed under this field. Absent or `null` means no references.
    pub fn urls(self, raw: &Map<String, Value>) -> Result<Vec<String>, RecordError> {
        let not_a_list = || RecordError::NotAList { field: self.key() };
        match raw.get(self.key()) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string).ok_or_else(not_a_list))
                .collect(),
            Some(_) => Err(not_a_list()),
        }
    }
}

/// Fetch every URL in order and join the display fields with `", "`.
///
/// One request at a time; the first failure aborts the whole field.
pub async fn resolve_reference_list<S: JsonSource>(
    source: &S,
    field: ReferenceField,
    urls: &[String],
) -> Result<String, RecordError> {
    let mut names = Vec::with_capacity(urls.len());
    for url in urls {
        let resource = source
            .get_json(url)
            .await
            .map_err(|e| RecordError::Fetch {
                field: field.key(),
                source: e,
            })?;
        let name = resource
            .get(field.display_field())
            .and_then(Value::as_str)
            .ok_or_else(|| RecordError::MissingField {
                url: url.clone(),
                field: field.display_field(),
            })?;
        names.push(name.to_string());
    }
    Ok(names.join(JOIN_SEPARATOR))
}
