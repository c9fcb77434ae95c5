use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::class::ClassSnapshot;
use super::entries::{decode_entries, entries};
use crate::core_types::schema::OP_PARSE_SNAPSHOT;
use crate::errors::{ApiDiffError, ExError};

/// One side of a diff: every top-level entry of an extractor document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(deserialize_with = "entries")]
    pub items: Vec<ClassSnapshot>,
}

impl Snapshot {
    pub fn new(items: Vec<ClassSnapshot>) -> Self {
        Self { items }
    }

    /// Parse raw snapshot bytes
    ///
    /// # Errors
    ///
    /// - `InvalidSnapshot`: bytes are not UTF-8, not JSON, or the root is not
    ///   an object
    /// - `MissingField`: the top-level `items` list is absent
    ///
    /// Malformed entries below the root are logged and skipped.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ExError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            parse_error(ApiDiffError::SnapshotNotUtf8 {
                reason: e.to_string(),
            })
        })?;

        let raw: Value = serde_json::from_str(text).map_err(|e| {
            parse_error(ApiDiffError::SnapshotNotJson {
                reason: e.to_string(),
            })
        })?;

        Self::from_json_value(raw)
    }

    /// Validate and convert an already-parsed JSON document
    ///
    /// # Errors
    ///
    /// Same as [`Snapshot::from_json_bytes`], minus the UTF-8/JSON checks.
    pub fn from_json_value(raw: Value) -> Result<Self, ExError> {
        let Value::Object(mut obj) = raw else {
            return Err(parse_error(ApiDiffError::SnapshotNotObject));
        };

        match obj.remove("items") {
            Some(items @ Value::Array(_)) => Ok(Self::new(decode_entries(items))),
            _ => Err(parse_error(ApiDiffError::MissingItems)),
        }
    }

    pub fn classes(&self) -> &[ClassSnapshot] {
        &self.items
    }
}

fn parse_error(err: ApiDiffError) -> ExError {
    ExError::from(err).with_op(OP_PARSE_SNAPSHOT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;
    use serde_json::json;

    #[test]
    fn test_parse_valid_document() {
        let bytes = serde_json::to_vec(&json!({
            "items": [
                {"$type": "class", "name": "Ext.Base"},
                {"$type": "comment"}
            ]
        }))
        .unwrap();

        let snapshot = Snapshot::from_json_bytes(&bytes).unwrap();
        assert_eq!(snapshot.classes().len(), 2);
        assert!(snapshot.classes()[0].is_class());
    }

    #[test]
    fn test_malformed_class_is_skipped() {
        let bytes = serde_json::to_vec(&json!({
            "items": [
                {"$type": "class", "name": 7},
                {"$type": "class", "name": "Ext.Base", "items": [
                    {"$type": "configs", "items": [{"name": "a"}, {"name": ["b"]}]},
                    {"$type": "methods", "items": "none"}
                ]}
            ]
        }))
        .unwrap();

        let snapshot = Snapshot::from_json_bytes(&bytes).unwrap();
        assert_eq!(snapshot.classes().len(), 1);
        let base = &snapshot.classes()[0];
        assert_eq!(base.name(), Some("Ext.Base"));
        assert_eq!(base.groups[0].items.len(), 1);
        assert!(base.groups[1].items.is_empty());
    }

    #[test]
    fn test_missing_items_is_fatal() {
        let err = Snapshot::from_json_bytes(br#"{"classes": []}"#).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MissingField);
        assert_eq!(err.op(), Some(OP_PARSE_SNAPSHOT));
    }

    #[test]
    fn test_items_must_be_a_list() {
        let err = Snapshot::from_json_bytes(br#"{"items": {}}"#).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MissingField);
    }

    #[test]
    fn test_invalid_bytes() {
        let err = Snapshot::from_json_bytes(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);

        let err = Snapshot::from_json_bytes(b"not json").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);

        let err = Snapshot::from_json_bytes(b"[1, 2]").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);
    }
}
