//! Class-level orchestration.
//!
//! Matches classes by name across the two snapshots, walks every member
//! category of matched classes, and compares class-level attributes.

use std::collections::{BTreeMap, BTreeSet};

use super::counts::CountTable;
use super::index::{NameIndex, Scope};
use super::members::diff_category;
use super::model::{Action, ActionSet, ApiDiff, ChangeRecord};
use super::scalar::first_difference;
use crate::log_anomaly;
use crate::model::{Category, ClassAttr, ClassSnapshot};

const CLASS_KIND: &str = "class";

/// Diff two lists of top-level entries
///
/// Classes come out in new-side order, followed by removed classes in
/// old-side order. Ignored entries are never reported on either side; a
/// removed entry is reported only when it is a real class. A repeated
/// new-side name is counted in `total` but only its first occurrence is
/// diffed.
pub fn diff_classes(new: &[ClassSnapshot], old: &[ClassSnapshot]) -> ApiDiff {
    let scope = Scope::classes();
    let old_index = NameIndex::build(old, scope);
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    let mut counts = CountTable::new();
    let mut classes = Vec::new();

    for class in new {
        if class.ignore {
            if let Some(name) = class.name() {
                seen.insert(name);
            }
            continue;
        }
        let Some(name) = class.name() else {
            log_anomaly!(scope.op, "class without a name", category = scope.category.as_str());
            continue;
        };

        let flags = class.flags();
        counts.evaluated(Category::Classes, flags);

        if !seen.insert(name) {
            log_anomaly!(
                scope.op,
                "duplicate class name",
                category = scope.category.as_str(),
                member = name,
            );
            continue;
        }

        match old_index.get(name) {
            Some(old_class) => {
                if let Some(record) = diff_class(name, class, old_class, &mut counts) {
                    counts.record(Category::Classes, Action::Modified, flags);
                    classes.push(record);
                }
            }
            None => {
                counts.record(Category::Classes, Action::Added, flags);
                classes.push(ChangeRecord::new(Action::Added, name, CLASS_KIND, flags));
            }
        }
    }

    for (name, old_class) in old_index.iter() {
        if seen.contains(name) || old_class.ignore || !old_class.is_class() {
            continue;
        }
        let flags = old_class.flags();
        counts.evaluated(Category::Classes, flags);
        counts.record(Category::Classes, Action::Removed, flags);
        classes.push(ChangeRecord::new(Action::Removed, name, CLASS_KIND, flags));
    }

    ApiDiff { classes, counts }
}

/// Diff one matched class; `None` when nothing inside it changed
pub fn diff_class(
    name: &str,
    new: &ClassSnapshot,
    old: &ClassSnapshot,
    counts: &mut CountTable,
) -> Option<ChangeRecord> {
    let flags = new.flags();
    let mut categories = BTreeMap::new();

    for category in Category::MEMBERS {
        let changes = diff_category(
            name,
            category,
            new.group(category),
            old.group(category),
            counts,
        );
        if !changes.is_empty() {
            categories.insert(category, changes);
        }
    }

    counts.evaluated(Category::ClassProps, flags);
    if let Some(delta) = first_difference(new, Some(old), &ClassAttr::TEST_ORDER).into_delta() {
        counts.record(Category::ClassProps, Action::Modified, flags);
        let mut details = ActionSet::default();
        details.push(ChangeRecord::class_detail(name, flags, delta));
        categories.insert(Category::ClassProps, details);
    }

    if categories.is_empty() {
        return None;
    }
    Some(ChangeRecord::new(Action::Modified, name, CLASS_KIND, flags).with_categories(categories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::counts::Bucket;
    use crate::model::AttrValue;
    use serde_json::{json, Value};

    fn classes(v: Value) -> Vec<ClassSnapshot> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_identical_snapshots_produce_nothing() {
        let side = classes(json!([
            {"$type": "class", "name": "Foo", "extends": "Base", "items": [
                {"$type": "methods", "items": [{"$type": "method", "name": "bar"}]}
            ]}
        ]));
        let diff = diff_classes(&side, &side);
        assert!(diff.is_empty());
        assert_eq!(diff.counts.get(Category::Classes).all.total, 1);
        assert_eq!(diff.counts.get(Category::Classes).all.changes(), 0);
    }

    #[test]
    fn test_added_and_removed_classes() {
        let new = classes(json!([{"$type": "class", "name": "Bar"}]));
        let old = classes(json!([{"$type": "class", "name": "Foo"}]));

        let diff = diff_classes(&new, &old);
        assert_eq!(diff.classes.len(), 2);
        assert_eq!(diff.classes[0].action, Action::Added);
        assert_eq!(diff.classes[0].name, "Bar");
        assert_eq!(diff.classes[1].action, Action::Removed);
        assert_eq!(diff.classes[1].name, "Foo");

        let c = diff.counts.get(Category::Classes).all;
        assert_eq!((c.added, c.removed, c.total), (1, 1, 2));
    }

    #[test]
    fn test_non_class_entries_are_never_removed() {
        let new = classes(json!([]));
        let old = classes(json!([{"$type": "detached", "name": "note"}, {"name": "untyped"}]));
        assert!(diff_classes(&new, &old).is_empty());
    }

    #[test]
    fn test_ignored_new_class_suppresses_removal() {
        let new = classes(json!([{"$type": "class", "name": "Foo", "ignore": true}]));
        let old = classes(json!([{"$type": "class", "name": "Foo", "extends": "X"}]));
        let diff = diff_classes(&new, &old);
        assert!(diff.is_empty());
        assert_eq!(diff.counts.get(Category::Classes).all.total, 0);
    }

    #[test]
    fn test_class_attribute_change_is_filed_under_class_props() {
        let new = classes(json!([{"$type": "class", "name": "Foo", "singleton": true}]));
        let old = classes(json!([{"$type": "class", "name": "Foo"}]));

        let diff = diff_classes(&new, &old);
        let foo = diff.class("Foo").unwrap();
        assert_eq!(foo.action, Action::Modified);

        let details = foo.category(Category::ClassProps).unwrap();
        let detail = &details.modified[0];
        assert!(detail.is_class);
        assert_eq!(detail.delta.as_ref().unwrap().key, "singleton");

        let props = diff.counts.get(Category::ClassProps).all;
        assert_eq!((props.modified, props.total), (1, 1));
        assert_eq!(diff.counts.get(Category::Classes).all.modified, 1);
    }

    #[test]
    fn test_member_change_marks_class_modified() {
        let new = classes(json!([{"$type": "class", "name": "Foo", "access": "private", "items": [
            {"$type": "configs", "items": [{"$type": "config", "name": "timeout"}]}
        ]}]));
        let old = classes(json!([{"$type": "class", "name": "Foo", "access": "private", "items": [
            {"$type": "configs", "items": []}
        ]}]));

        let diff = diff_classes(&new, &old);
        let foo = diff.class("Foo").unwrap();
        assert!(foo.is_private);
        assert!(!foo.is_class);
        let configs = foo.category(Category::Configs).unwrap();
        assert_eq!(configs.added[0].name, "timeout");
        assert_eq!(
            diff.counts.get(Category::Classes).bucket(Bucket::Private).modified,
            1
        );
    }

    #[test]
    fn test_duplicate_old_class_keeps_first() {
        let new = classes(json!([{"$type": "class", "name": "Foo", "extends": "A"}]));
        let old = classes(json!([
            {"$type": "class", "name": "Foo", "extends": "A"},
            {"$type": "class", "name": "Foo", "extends": "B"}
        ]));
        assert!(diff_classes(&new, &old).is_empty());
    }

    #[test]
    fn test_duplicate_new_class_is_diffed_once() {
        let new = classes(json!([
            {"$type": "class", "name": "Foo", "extends": "B"},
            {"$type": "class", "name": "Foo", "extends": "C"}
        ]));
        let old = classes(json!([{"$type": "class", "name": "Foo", "extends": "A"}]));

        let diff = diff_classes(&new, &old);
        assert_eq!(diff.classes.len(), 1);
        let delta = diff.classes[0]
            .category(Category::ClassProps)
            .and_then(|details| details.modified[0].delta.clone())
            .unwrap();
        assert_eq!(delta.new_value, Some(AttrValue::from("B")));

        let c = diff.counts.get(Category::Classes).all;
        assert_eq!((c.total, c.modified), (2, 1));
        assert_eq!(diff.counts.get(Category::ClassProps).all.total, 1);
    }
}
