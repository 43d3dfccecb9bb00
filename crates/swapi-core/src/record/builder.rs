use serde_json::{Map, Value};

use super::references::{resolve_reference_list, ReferenceField};
use super::{extract_id, CharacterRecord, RecordError};
use crate::fetch::JsonSource;

/// Copy a scalar attribute: strings verbatim, missing/`null` as `""`,
/// anything else as its compact JSON text.
fn scalar(raw: &Map<String, Value>, key: &str) -> String {
    match raw.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Build a flat record from a raw character object fetched from `url`.
///
/// References are resolved films, species, starships, vehicles in that order,
/// one GET at a time. Any failure discards the whole record.
pub async fn build_record<S: JsonSource>(
    source: &S,
    raw: &Value,
    url: &str,
) -> Result<CharacterRecord, RecordError> {
    let id = extract_id(url)?;
    let raw = raw.as_object().ok_or_else(|| RecordError::NotAnObject {
        url: url.to_string(),
    })?;

    let mut resolved: [String; 4] = Default::default();
    for (slot, field) in resolved.iter_mut().zip(ReferenceField::ALL) {
        let urls = field.urls(raw)?;
        *slot = resolve_reference_list(source, field, &urls).await?;
    }
    let [films, species, starships, vehicles] = resolved;

    Ok(CharacterRecord {
        id,
        birth_year: scalar(raw, "birth_year"),
        eye_color: scalar(raw, "eye_color"),
        films,
        gender: scalar(raw, "gender"),
        hair_color: scalar(raw, "hair_color"),
        height: scalar(raw, "height"),
        homeworld: scalar(raw, "homeworld"),
        mass: scalar(raw, "mass"),
        name: scalar(raw, "name"),
        skin_color: scalar(raw, "skin_color"),
        species,
        starships,
        vehicles,
    })
}
