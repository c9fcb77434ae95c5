//! Name index over one side of a comparison.
//!
//! Built once per list. The first entry with a given name wins; later
//! duplicates and unnamed entries are logged and left out.

use std::collections::BTreeMap;

use crate::core_types::schema::OP_DIFF_SNAPSHOTS;
use crate::log_anomaly;
use crate::model::{Category, ClassSnapshot, Member};

/// An entry keyed by name
pub trait Named {
    fn entry_name(&self) -> Option<&str>;
}

impl Named for Member {
    fn entry_name(&self) -> Option<&str> {
        self.name()
    }
}

impl Named for ClassSnapshot {
    fn entry_name(&self) -> Option<&str> {
        self.name()
    }
}

/// Where in the snapshot a walk currently is; used for log context
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub op: &'static str,
    pub class: &'a str,
    pub category: Category,
    /// Enclosing member, for nested items
    pub parent: Option<&'a str>,
}

impl<'a> Scope<'a> {
    /// Scope of the top-level class lists
    pub fn classes() -> Scope<'static> {
        Scope {
            op: OP_DIFF_SNAPSHOTS,
            class: "",
            category: Category::Classes,
            parent: None,
        }
    }

    pub fn category(op: &'static str, class: &'a str, category: Category) -> Self {
        Self {
            op,
            class,
            category,
            parent: None,
        }
    }

    pub fn nested(self, op: &'static str, parent: &'a str) -> Self {
        Self {
            op,
            parent: Some(parent),
            ..self
        }
    }
}

/// Ordered keep-first index of named entries
#[derive(Debug)]
pub struct NameIndex<'a, T> {
    order: Vec<(&'a str, &'a T)>,
    by_name: BTreeMap<&'a str, &'a T>,
}

impl<'a, T: Named> NameIndex<'a, T> {
    pub fn build(entries: &'a [T], scope: Scope<'_>) -> Self {
        let mut order = Vec::with_capacity(entries.len());
        let mut by_name = BTreeMap::new();

        for entry in entries {
            let Some(name) = entry.entry_name() else {
                log_anomaly!(
                    scope.op,
                    "old-side entry without a name",
                    class = scope.class,
                    category = scope.category.as_str(),
                );
                continue;
            };
            if by_name.contains_key(name) {
                log_anomaly!(
                    scope.op,
                    "duplicate old-side name",
                    class = scope.class,
                    category = scope.category.as_str(),
                    member = name,
                );
                continue;
            }
            by_name.insert(name, entry);
            order.push((name, entry));
        }

        Self { order, by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a T> {
        self.by_name.get(name).copied()
    }

    /// First occurrences, in list order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a T)> + '_ {
        self.order.iter().copied()
    }
}
