//! Scalar attribute differ.
//!
//! Reports only the first attribute, in test order, whose value differs.
//! Later differing attributes of the same entity are not surfaced.

use super::model::AttributeDelta;
use crate::model::{AttributeKey, Attributed};

/// Outcome of comparing one entity's scalar attributes
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarOutcome {
    /// No old entity to compare against
    Added,
    /// Every tested attribute is equal
    Unchanged,
    Changed(AttributeDelta),
}

impl ScalarOutcome {
    pub fn into_delta(self) -> Option<AttributeDelta> {
        match self {
            ScalarOutcome::Changed(delta) => Some(delta),
            _ => None,
        }
    }
}

pub fn first_difference<E: Attributed>(
    new: &E,
    old: Option<&E>,
    order: &[E::Key],
) -> ScalarOutcome {
    let Some(old) = old else {
        return ScalarOutcome::Added;
    };

    order
        .iter()
        .find_map(|key| {
            let new_value = new.attribute(*key);
            let old_value = old.attribute(*key);
            (new_value != old_value).then(|| AttributeDelta {
                key: key.key().to_string(),
                old_value: old_value.cloned(),
                new_value: new_value.cloned(),
            })
        })
        .map_or(ScalarOutcome::Unchanged, ScalarOutcome::Changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttrValue, ClassAttr, ClassSnapshot, Member, MemberAttr};
    use serde_json::json;

    fn member(v: serde_json::Value) -> Member {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_no_old_entity_is_added() {
        let new = member(json!({"name": "bar"}));
        assert_eq!(
            first_difference(&new, None, &MemberAttr::TEST_ORDER),
            ScalarOutcome::Added
        );
    }

    #[test]
    fn test_identical_is_unchanged() {
        let new = member(json!({"name": "bar", "access": "public", "type": "String"}));
        let old = new.clone();
        assert_eq!(
            first_difference(&new, Some(&old), &MemberAttr::TEST_ORDER),
            ScalarOutcome::Unchanged
        );
    }

    #[test]
    fn test_only_first_difference_is_reported() {
        let new = member(json!({"name": "bar", "access": "private", "type": "Number"}));
        let old = member(json!({"name": "bar", "access": "public", "type": "String"}));

        let delta = first_difference(&new, Some(&old), &MemberAttr::TEST_ORDER)
            .into_delta()
            .unwrap();
        assert_eq!(delta.key, "access");
        assert_eq!(delta.old_value, Some(AttrValue::from("public")));
        assert_eq!(delta.new_value, Some(AttrValue::from("private")));
    }

    #[test]
    fn test_test_order_decides_which_attribute_wins() {
        let new = member(json!({"name": "bar", "access": "private", "type": "Number"}));
        let old = member(json!({"name": "bar", "access": "public", "type": "String"}));

        let reversed = [MemberAttr::Type, MemberAttr::Access];
        let delta = first_difference(&new, Some(&old), &reversed)
            .into_delta()
            .unwrap();
        assert_eq!(delta.key, "type");
    }

    #[test]
    fn test_attribute_appearing_counts_as_change() {
        let new = member(json!({"name": "bar", "hide": true}));
        let old = member(json!({"name": "bar"}));
        let delta = first_difference(&new, Some(&old), &MemberAttr::TEST_ORDER)
            .into_delta()
            .unwrap();
        assert_eq!(delta.key, "hide");
        assert_eq!(delta.old_value, None);
    }

    #[test]
    fn test_class_attributes() {
        let new: ClassSnapshot =
            serde_json::from_value(json!({"name": "A", "extends": "B", "singleton": true}))
                .unwrap();
        let old: ClassSnapshot =
            serde_json::from_value(json!({"name": "A", "extends": "C"})).unwrap();
        let delta = first_difference(&new, Some(&old), &ClassAttr::TEST_ORDER)
            .into_delta()
            .unwrap();
        assert_eq!(delta.key, "extends");
    }
}
