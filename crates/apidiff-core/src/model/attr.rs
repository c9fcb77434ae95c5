use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar attribute value as emitted by the metadata extractor
///
/// Values compare structurally: two lists with equal elements are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<AttrValue>),
    Other(serde_json::Value),
}

impl AttrValue {
    /// Borrow the string payload, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Flag(b) => write!(f, "{}", b),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::List(values) => {
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                Ok(())
            }
            AttrValue::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Flag(b)
    }
}

/// A compile-time attribute name with its JSON key
pub trait AttributeKey: Copy {
    fn key(self) -> &'static str;
}

/// An entity whose scalar attributes can be looked up by key
pub trait Attributed {
    type Key: AttributeKey;

    fn attribute(&self, key: Self::Key) -> Option<&AttrValue>;
}

/// Bucket predicates of one entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityFlags {
    pub private: bool,
    pub deprecated: bool,
}

impl EntityFlags {
    /// Derive flags from the `access` and `deprecatedVersion` attributes
    pub fn from_attributes(access: Option<&AttrValue>, deprecated: Option<&AttrValue>) -> Self {
        Self {
            private: access.and_then(AttrValue::as_text) == Some("private"),
            deprecated: deprecated.is_some(),
        }
    }
}
