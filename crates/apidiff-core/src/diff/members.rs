//! Member category differ.
//!
//! Walks one category's members (and, recursively, their nested items) on
//! both sides and classifies each by name. The same walk serves both levels;
//! only the top level feeds the [`CountTable`].

use std::collections::BTreeSet;

use super::counts::CountTable;
use super::index::{NameIndex, Scope};
use super::model::{Action, ActionSet, ChangeRecord};
use super::scalar::{first_difference, ScalarOutcome};
use crate::core_types::schema::{OP_DIFF_CATEGORY, OP_DIFF_ITEMS};
use crate::log_anomaly;
use crate::model::{Category, EntityFlags, Member, MemberAttr, MemberGroup};

/// Receives the counting events of a member walk
trait Tally {
    fn evaluated(&mut self, flags: EntityFlags);
    fn ignored(&mut self);
    fn classified(&mut self, action: Action, flags: EntityFlags);
}

/// Nested items are reported but never counted
struct Uncounted;

impl Tally for Uncounted {
    fn evaluated(&mut self, _flags: EntityFlags) {}
    fn ignored(&mut self) {}
    fn classified(&mut self, _action: Action, _flags: EntityFlags) {}
}

struct CategoryTally<'c> {
    category: Category,
    counts: &'c mut CountTable,
}

impl Tally for CategoryTally<'_> {
    fn evaluated(&mut self, flags: EntityFlags) {
        self.counts.evaluated(self.category, flags);
    }

    fn ignored(&mut self) {
        self.counts.ignored(self.category);
    }

    fn classified(&mut self, action: Action, flags: EntityFlags) {
        self.counts.record(self.category, action, flags);
    }
}

/// Diff one category of a class
///
/// If either side has no group for the category, nothing can be compared and
/// nothing is counted.
pub fn diff_category(
    class: &str,
    category: Category,
    new_group: Option<&MemberGroup>,
    old_group: Option<&MemberGroup>,
    counts: &mut CountTable,
) -> ActionSet {
    let (Some(new_group), Some(old_group)) = (new_group, old_group) else {
        return ActionSet::default();
    };

    let scope = Scope::category(OP_DIFF_CATEGORY, class, category);
    let mut tally = CategoryTally { category, counts };
    diff_member_lists(scope, &new_group.items, &old_group.items, &mut tally)
}

/// Diff the nested items of a member; uncounted
pub fn diff_items(scope: Scope<'_>, new_items: &[Member], old_items: &[Member]) -> ActionSet {
    diff_member_lists(scope, new_items, old_items, &mut Uncounted)
}

/// Compare one named member against its old counterpart
///
/// Returns `None` when neither a scalar attribute nor any nested item changed.
pub fn diff_member(
    scope: Scope<'_>,
    name: &str,
    new: &Member,
    old: Option<&Member>,
) -> Option<ChangeRecord> {
    let record = ChangeRecord::new(Action::Added, name, new.kind.as_str(), new.flags());

    let delta = match first_difference(new, old, &MemberAttr::TEST_ORDER) {
        ScalarOutcome::Added => return Some(record),
        outcome => outcome.into_delta(),
    };
    let old = old?;

    let nested = diff_items(scope.nested(OP_DIFF_ITEMS, name), &new.items, &old.items);
    if delta.is_none() && nested.is_empty() {
        return None;
    }

    let mut record = ChangeRecord {
        action: Action::Modified,
        ..record
    }
    .with_items(nested);
    record.delta = delta;
    Some(record)
}

fn diff_member_lists(
    scope: Scope<'_>,
    new: &[Member],
    old: &[Member],
    tally: &mut dyn Tally,
) -> ActionSet {
    let old_index = NameIndex::build(old, scope);
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut changes = ActionSet::default();

    for member in new {
        let flags = member.flags();
        tally.evaluated(flags);

        if member.ignore {
            tally.ignored();
            if let Some(name) = member.name() {
                seen.insert(name);
            }
            continue;
        }

        let Some(name) = member.name() else {
            log_anomaly!(
                scope.op,
                "member without a name",
                class = scope.class,
                category = scope.category.as_str(),
                parent = scope.parent.unwrap_or_default(),
            );
            continue;
        };

        if !seen.insert(name) {
            log_anomaly!(
                scope.op,
                "duplicate member name",
                class = scope.class,
                category = scope.category.as_str(),
                parent = scope.parent.unwrap_or_default(),
                member = name,
            );
            continue;
        }

        if let Some(record) = diff_member(scope, name, member, old_index.get(name)) {
            tally.classified(record.action, flags);
            changes.push(record);
        }
    }

    for (name, member) in old_index.iter() {
        if member.ignore || seen.contains(name) {
            continue;
        }
        let flags = member.flags();
        tally.evaluated(flags);
        tally.classified(Action::Removed, flags);
        changes.push(ChangeRecord::new(
            Action::Removed,
            name,
            member.kind.as_str(),
            flags,
        ));
    }

    changes
}
