use apidiff_core::model::{ClassSnapshot, Snapshot};
use serde_json::{json, Value};

/// Serialize a JSON value to snapshot bytes
#[allow(dead_code)]
pub fn to_bytes(v: &Value) -> Vec<u8> {
    serde_json::to_vec(v).unwrap()
}

/// Wrap entries in a snapshot document
#[allow(dead_code)]
pub fn document(items: Value) -> Value {
    json!({ "items": items })
}

/// Parse a list of entries into a snapshot
#[allow(dead_code)]
pub fn snapshot(items: Value) -> Snapshot {
    let items: Vec<ClassSnapshot> = serde_json::from_value(items).unwrap();
    Snapshot::new(items)
}

/// A class entry with the given member groups
#[allow(dead_code)]
pub fn class(name: &str, groups: Value) -> Value {
    json!({ "$type": "class", "name": name, "items": groups })
}

/// A member group entry
#[allow(dead_code)]
pub fn group(category: &str, members: Value) -> Value {
    json!({ "$type": category, "items": members })
}

/// A realistic two-class snapshot used by several suites
#[allow(dead_code)]
pub fn panel_snapshot() -> Value {
    json!([
        {
            "$type": "class",
            "name": "Ext.panel.Panel",
            "extends": "Ext.container.Container",
            "alternateClassNames": ["Ext.Panel"],
            "items": [
                {"$type": "configs", "items": [
                    {"$type": "config", "name": "title", "type": "String"},
                    {"$type": "config", "name": "collapsible", "type": "Boolean", "value": false},
                    {"$type": "config", "name": "internalFlag", "type": "Boolean", "access": "private"}
                ]},
                {"$type": "methods", "items": [
                    {"$type": "method", "name": "collapse", "items": [
                        {"$type": "param", "name": "direction", "type": "String"},
                        {"$type": "return", "name": "return", "type": "Ext.panel.Panel"}
                    ]},
                    {"$type": "method", "name": "setTitle", "deprecatedVersion": "6.0", "items": [
                        {"$type": "param", "name": "title", "type": "String"}
                    ]}
                ]},
                {"$type": "events", "items": [
                    {"$type": "event", "name": "collapse"}
                ]}
            ]
        },
        {
            "$type": "class",
            "name": "Ext.window.Window",
            "extends": "Ext.panel.Panel",
            "items": [
                {"$type": "configs", "items": [
                    {"$type": "config", "name": "modal", "type": "Boolean"}
                ]}
            ]
        },
        {"$type": "detached", "text": "guide comment"}
    ])
}
