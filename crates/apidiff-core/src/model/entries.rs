//! Entry-by-entry list decoding
//!
//! Every list in a snapshot (classes, member groups, members, nested items)
//! is decoded one entry at a time. An entry that does not fit its type is
//! logged as an anomaly and dropped; its siblings still load.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core_types::schema::OP_PARSE_SNAPSHOT;
use crate::log_anomaly;

/// `deserialize_with` adapter for entry lists
pub(crate) fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(decode_entries(raw))
}

/// Decode a JSON list, skipping entries that fail to convert
///
/// `null` reads as an empty list. Any other non-list value is logged and
/// read as empty.
pub(crate) fn decode_entries<T: DeserializeOwned>(raw: Value) -> Vec<T> {
    let list = match raw {
        Value::Array(list) => list,
        Value::Null => return Vec::new(),
        other => {
            log_anomaly!(
                OP_PARSE_SNAPSHOT,
                "entry list is not an array",
                found = json_type(&other),
            );
            return Vec::new();
        }
    };

    list.into_iter()
        .filter_map(|entry| {
            let name = entry
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_owned);
            match serde_json::from_value(entry) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    log_anomaly!(
                        OP_PARSE_SNAPSHOT,
                        "malformed entry skipped",
                        member = name.as_deref().unwrap_or_default(),
                        error = %e,
                    );
                    None
                }
            }
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
