//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Ordered `Vec`s keep input order; maps are `BTreeMap` so that serialized
//! output is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::counts::CountTable;
use crate::model::{AttrValue, Category, EntityFlags};

/// Classification of one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Added,
    Modified,
    Removed,
}

impl Action {
    /// Report order
    pub const ALL: [Action; 3] = [Action::Added, Action::Modified, Action::Removed];

    pub fn label(self) -> &'static str {
        match self {
            Action::Added => "Added",
            Action::Modified => "Modified",
            Action::Removed => "Removed",
        }
    }
}

/// The single scalar attribute change surfaced for an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDelta {
    pub key: String,
    pub old_value: Option<AttrValue>,
    pub new_value: Option<AttrValue>,
}

impl fmt::Display for AttributeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}** is {} (was {})",
            self.key,
            DisplayValue(self.new_value.as_ref()),
            DisplayValue(self.old_value.as_ref())
        )
    }
}

struct DisplayValue<'a>(Option<&'a AttrValue>);

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => f.write_str("none"),
        }
    }
}

/// Added / modified / removed child records, each in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub added: Vec<ChangeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modified: Vec<ChangeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed: Vec<ChangeRecord>,
}

impl ActionSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.modified.len() + self.removed.len()
    }

    /// File a record under its own action
    pub fn push(&mut self, record: ChangeRecord) {
        match record.action {
            Action::Added => self.added.push(record),
            Action::Modified => self.modified.push(record),
            Action::Removed => self.removed.push(record),
        }
    }

    pub fn get(&self, action: Action) -> &[ChangeRecord] {
        match action {
            Action::Added => &self.added,
            Action::Modified => &self.modified,
            Action::Removed => &self.removed,
        }
    }

    /// Find a record by action and name
    pub fn find(&self, action: Action, name: &str) -> Option<&ChangeRecord> {
        self.get(action).iter().find(|r| r.name == name)
    }
}

/// One added, modified or removed entity
///
/// Member records may carry a scalar `delta` and nested `items`. Class
/// records carry per-category changes in `categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub action: Action,
    pub name: String,
    #[serde(rename = "$type")]
    pub kind: String,
    pub is_private: bool,
    pub is_deprecated: bool,
    /// Set on class-level attribute records (the `class-props` category)
    pub is_class: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<AttributeDelta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ActionSet>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<Category, ActionSet>,
}

impl ChangeRecord {
    pub fn new(
        action: Action,
        name: impl Into<String>,
        kind: impl Into<String>,
        flags: EntityFlags,
    ) -> Self {
        Self {
            action,
            name: name.into(),
            kind: kind.into(),
            is_private: flags.private,
            is_deprecated: flags.deprecated,
            is_class: false,
            delta: None,
            items: None,
            categories: BTreeMap::new(),
        }
    }

    /// A modified class-level attribute of the named class
    pub fn class_detail(name: impl Into<String>, flags: EntityFlags, delta: AttributeDelta) -> Self {
        let mut record = Self::new(Action::Modified, name, "class", flags).with_delta(delta);
        record.is_class = true;
        record
    }

    pub fn with_delta(mut self, delta: AttributeDelta) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Attach nested changes; an empty set is dropped
    pub fn with_items(mut self, items: ActionSet) -> Self {
        self.items = (!items.is_empty()).then_some(items);
        self
    }

    pub fn with_categories(mut self, categories: BTreeMap<Category, ActionSet>) -> Self {
        self.categories = categories;
        self
    }

    pub fn flags(&self) -> EntityFlags {
        EntityFlags {
            private: self.is_private,
            deprecated: self.is_deprecated,
        }
    }

    /// Changes filed under one category of a class record
    pub fn category(&self, category: Category) -> Option<&ActionSet> {
        self.categories.get(&category)
    }
}

/// The result of one diff run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDiff {
    /// Added, modified and removed classes; new-side order, removals last
    pub classes: Vec<ChangeRecord>,
    pub counts: CountTable,
}

impl ApiDiff {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn class(&self, name: &str) -> Option<&ChangeRecord> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn classes_with(&self, action: Action) -> impl Iterator<Item = &ChangeRecord> {
        self.classes.iter().filter(move |c| c.action == action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_display() {
        let delta = AttributeDelta {
            key: "access".into(),
            old_value: Some("public".into()),
            new_value: Some("private".into()),
        };
        assert_eq!(delta.to_string(), "**access** is private (was public)");

        let delta = AttributeDelta {
            key: "hide".into(),
            old_value: None,
            new_value: Some(AttrValue::Flag(true)),
        };
        assert_eq!(delta.to_string(), "**hide** is true (was none)");
    }

    #[test]
    fn test_action_set_files_by_action() {
        let mut set = ActionSet::default();
        assert!(set.is_empty());
        set.push(ChangeRecord::new(Action::Removed, "a", "method", EntityFlags::default()));
        set.push(ChangeRecord::new(Action::Added, "b", "method", EntityFlags::default()));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(Action::Removed)[0].name, "a");
        assert!(set.find(Action::Added, "b").is_some());
        assert!(set.find(Action::Modified, "b").is_none());
    }

    #[test]
    fn test_with_items_drops_empty() {
        let r = ChangeRecord::new(Action::Modified, "m", "method", EntityFlags::default())
            .with_items(ActionSet::default());
        assert!(r.items.is_none());
    }

    #[test]
    fn test_record_json_field_names() {
        let flags = EntityFlags {
            private: true,
            deprecated: false,
        };
        let r = ChangeRecord::new(Action::Added, "bar", "method", flags);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["$type"], "method");
        assert_eq!(json["isPrivate"], true);
        assert_eq!(json["action"], "added");
        assert!(json.get("delta").is_none());
    }
}
