use serde_json::Value;

/// True for exactly `{"detail": "Not found"}`, the API's "no such id" body.
pub fn is_not_found(body: &Value) -> bool {
    match body.as_object() {
        Some(map) => map.len() == 1 && map.get("detail").and_then(Value::as_str) == Some("Not found"),
        None => false,
    }
}
