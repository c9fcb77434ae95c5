use serde::{Deserialize, Serialize};

use super::attr::{AttrValue, AttributeKey, Attributed, EntityFlags};
use super::entries::entries;

/// Member kind (`$type` of a member or nested item)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberKind {
    Config,
    Property,
    Method,
    Event,
    Var,
    Param,
    Return,
    SassMixin,
    #[default]
    #[serde(other)]
    Other,
}

impl MemberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberKind::Config => "config",
            MemberKind::Property => "property",
            MemberKind::Method => "method",
            MemberKind::Event => "event",
            MemberKind::Var => "var",
            MemberKind::Param => "param",
            MemberKind::Return => "return",
            MemberKind::SassMixin => "sass-mixin",
            MemberKind::Other => "other",
        }
    }
}

/// One member of a `MemberGroup`, or a nested item (param, return value,
/// sub-property) of another member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Key within the enclosing list; entries without one are skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "$type", default)]
    pub kind: MemberKind,

    /// Excluded from diffing but still counted
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,

    #[serde(flatten)]
    pub attributes: MemberAttributes,

    /// Nested sub-items, same shape recursively
    #[serde(
        default,
        deserialize_with = "entries",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<Member>,
}

impl Member {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn flags(&self) -> EntityFlags {
        EntityFlags::from_attributes(
            self.attributes.access.as_ref(),
            self.attributes.deprecated_version.as_ref(),
        )
    }
}

/// The testable scalar attributes of a member
///
/// Every field is optional; absence and presence are both meaningful to the
/// differ (`None` → `Some` is a change).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAttributes {
    /// `public`, `protected` or `private`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<AttrValue>,
    /// Set on a class's constructor method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructor: Option<AttrValue>,
    /// Version the member was deprecated in; presence marks it deprecated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_version: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheritdoc: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_doc: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<AttrValue>,
    /// Events only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preventable: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readonly: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<AttrValue>,
    #[serde(default, rename = "static", skip_serializing_if = "Option::is_none")]
    pub is_static: Option<AttrValue>,
    /// Declared value type, e.g. `String` or `Ext.Component[]`
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<AttrValue>,
    /// Default value as source text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<AttrValue>,
}

/// Member attribute keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAttr {
    Access,
    Alias,
    Constructor,
    DeprecatedVersion,
    Hide,
    Inheritdoc,
    LocalDoc,
    Optional,
    Preventable,
    Readonly,
    Requires,
    Static,
    Type,
    Uses,
    Value,
}

impl MemberAttr {
    /// Order in which the scalar differ tests member attributes
    pub const TEST_ORDER: [MemberAttr; 15] = [
        MemberAttr::Access,
        MemberAttr::Alias,
        MemberAttr::Constructor,
        MemberAttr::DeprecatedVersion,
        MemberAttr::Hide,
        MemberAttr::Inheritdoc,
        MemberAttr::LocalDoc,
        MemberAttr::Optional,
        MemberAttr::Preventable,
        MemberAttr::Readonly,
        MemberAttr::Requires,
        MemberAttr::Static,
        MemberAttr::Type,
        MemberAttr::Uses,
        MemberAttr::Value,
    ];
}

impl AttributeKey for MemberAttr {
    fn key(self) -> &'static str {
        match self {
            MemberAttr::Access => "access",
            MemberAttr::Alias => "alias",
            MemberAttr::Constructor => "constructor",
            MemberAttr::DeprecatedVersion => "deprecatedVersion",
            MemberAttr::Hide => "hide",
            MemberAttr::Inheritdoc => "inheritdoc",
            MemberAttr::LocalDoc => "localDoc",
            MemberAttr::Optional => "optional",
            MemberAttr::Preventable => "preventable",
            MemberAttr::Readonly => "readonly",
            MemberAttr::Requires => "requires",
            MemberAttr::Static => "static",
            MemberAttr::Type => "type",
            MemberAttr::Uses => "uses",
            MemberAttr::Value => "value",
        }
    }
}

impl Attributed for Member {
    type Key = MemberAttr;

    fn attribute(&self, key: MemberAttr) -> Option<&AttrValue> {
        let a = &self.attributes;
        match key {
            MemberAttr::Access => a.access.as_ref(),
            MemberAttr::Alias => a.alias.as_ref(),
            MemberAttr::Constructor => a.constructor.as_ref(),
            MemberAttr::DeprecatedVersion => a.deprecated_version.as_ref(),
            MemberAttr::Hide => a.hide.as_ref(),
            MemberAttr::Inheritdoc => a.inheritdoc.as_ref(),
            MemberAttr::LocalDoc => a.local_doc.as_ref(),
            MemberAttr::Optional => a.optional.as_ref(),
            MemberAttr::Preventable => a.preventable.as_ref(),
            MemberAttr::Readonly => a.readonly.as_ref(),
            MemberAttr::Requires => a.requires.as_ref(),
            MemberAttr::Static => a.is_static.as_ref(),
            MemberAttr::Type => a.value_type.as_ref(),
            MemberAttr::Uses => a.uses.as_ref(),
            MemberAttr::Value => a.value.as_ref(),
        }
    }
}
