use serde::{Deserialize, Serialize};

use super::attr::{AttrValue, AttributeKey, Attributed, EntityFlags};
use super::category::Category;
use super::entries::entries;
use super::member::Member;

/// Top-level entry kind (`$type` of a snapshot item)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Class,
    /// Detached comments and any other non-class entry
    #[default]
    #[serde(other)]
    Detached,
}

/// One class's full description at a point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "$type", default)]
    pub kind: EntryKind,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,

    #[serde(flatten)]
    pub attributes: ClassAttributes,

    /// Member groups, one per category
    #[serde(
        default,
        rename = "items",
        deserialize_with = "entries",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub groups: Vec<MemberGroup>,
}

impl ClassSnapshot {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_class(&self) -> bool {
        self.kind == EntryKind::Class
    }

    pub fn flags(&self) -> EntityFlags {
        EntityFlags::from_attributes(
            self.attributes.access.as_ref(),
            self.attributes.deprecated_version.as_ref(),
        )
    }

    /// First group of the given category, if any
    pub fn group(&self, category: Category) -> Option<&MemberGroup> {
        self.groups.iter().find(|g| g.category == category)
    }
}

/// Members of one category within a class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberGroup {
    #[serde(rename = "$type", default)]
    pub category: Category,

    #[serde(default, deserialize_with = "entries")]
    pub items: Vec<Member>,
}

/// Class-level scalar attributes
///
/// `deprecated_version` is never diffed at class level; it only feeds the
/// deprecated bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_class_names: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixins: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singleton: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_version: Option<AttrValue>,
}

/// Class attribute keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassAttr {
    Alias,
    AlternateClassNames,
    Extends,
    Mixins,
    Uses,
    Singleton,
    Access,
    Requires,
}

impl ClassAttr {
    /// Order in which the scalar differ tests class attributes
    pub const TEST_ORDER: [ClassAttr; 8] = [
        ClassAttr::Alias,
        ClassAttr::AlternateClassNames,
        ClassAttr::Extends,
        ClassAttr::Mixins,
        ClassAttr::Uses,
        ClassAttr::Singleton,
        ClassAttr::Access,
        ClassAttr::Requires,
    ];
}

impl AttributeKey for ClassAttr {
    fn key(self) -> &'static str {
        match self {
            ClassAttr::Alias => "alias",
            ClassAttr::AlternateClassNames => "alternateClassNames",
            ClassAttr::Extends => "extends",
            ClassAttr::Mixins => "mixins",
            ClassAttr::Uses => "uses",
            ClassAttr::Singleton => "singleton",
            ClassAttr::Access => "access",
            ClassAttr::Requires => "requires",
        }
    }
}

impl Attributed for ClassSnapshot {
    type Key = ClassAttr;

    fn attribute(&self, key: ClassAttr) -> Option<&AttrValue> {
        let a = &self.attributes;
        match key {
            ClassAttr::Alias => a.alias.as_ref(),
            ClassAttr::AlternateClassNames => a.alternate_class_names.as_ref(),
            ClassAttr::Extends => a.extends.as_ref(),
            ClassAttr::Mixins => a.mixins.as_ref(),
            ClassAttr::Uses => a.uses.as_ref(),
            ClassAttr::Singleton => a.singleton.as_ref(),
            ClassAttr::Access => a.access.as_ref(),
            ClassAttr::Requires => a.requires.as_ref(),
        }
    }
}
