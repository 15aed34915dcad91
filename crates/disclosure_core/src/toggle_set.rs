//! Immutable set of active (open or checked) items.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of items currently active in a disclosure or selection control.
///
/// Membership is all that matters: two sets with the same members are equal
/// regardless of the order items were activated in. Iteration is ordered by the
/// item's [`Ord`] implementation so renders and notifications are stable.
///
/// The type is a value: every transition returns a new set and leaves the
/// receiver untouched, so readers holding a snapshot never observe a partially
/// applied toggle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleSet<K: Ord> {
    members: BTreeSet<K>,
}

impl<K: Ord> Default for ToggleSet<K> {
    fn default() -> Self {
        Self {
            members: BTreeSet::new(),
        }
    }
}

impl<K: Ord> ToggleSet<K> {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set holding exactly `item`.
    pub fn only(item: K) -> Self {
        Self {
            members: BTreeSet::from([item]),
        }
    }

    /// Returns `true` when `item` is active.
    pub fn contains(&self, item: &K) -> bool {
        self.members.contains(item)
    }

    /// Number of active items.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when nothing is active.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates active items in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.members.iter()
    }

    /// Returns `true` when `item` is the one and only member.
    pub fn is_sole_member(&self, item: &K) -> bool {
        self.members.len() == 1 && self.members.contains(item)
    }

    /// Consumes the set, returning its members in ascending order.
    pub fn into_vec(self) -> Vec<K> {
        self.members.into_iter().collect()
    }
}

impl<K: Ord + Clone> ToggleSet<K> {
    /// Returns a new set where `item` is present iff `include` is `true`.
    ///
    /// All other memberships are carried over unchanged. Including an item that
    /// is already present, or excluding one that is absent, yields a set equal
    /// to `self`.
    pub fn toggled(&self, item: K, include: bool) -> Self {
        let mut members = self.members.clone();
        if include {
            members.insert(item);
        } else {
            members.remove(&item);
        }
        Self { members }
    }
}

impl<K: Ord> FromIterator<K> for ToggleSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord> From<Vec<K>> for ToggleSet<K> {
    fn from(items: Vec<K>) -> Self {
        items.into_iter().collect()
    }
}

impl<K: Ord> IntoIterator for ToggleSet<K> {
    type Item = K;
    type IntoIter = std::collections::btree_set::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, K: Ord> IntoIterator for &'a ToggleSet<K> {
    type Item = &'a K;
    type IntoIter = std::collections::btree_set::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn equality_ignores_insertion_order() {
        let forward: ToggleSet<&str> = ["a", "b", "c"].into_iter().collect();
        let reverse: ToggleSet<&str> = ["c", "b", "a"].into_iter().collect();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn toggled_leaves_receiver_and_other_members_untouched() {
        let original = ToggleSet::from(vec![1, 3]);
        let next = original.toggled(2, true);

        assert_eq!(original.into_vec(), vec![1, 3]);
        assert_eq!(next.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn excluding_absent_item_is_a_value_noop() {
        let original = ToggleSet::from(vec![4]);
        assert_eq!(original.toggled(9, false), original);
        assert_eq!(original.toggled(4, true), original);
    }

    #[test]
    fn sole_member_requires_exactly_one_item() {
        assert!(ToggleSet::only(2).is_sole_member(&2));
        assert!(!ToggleSet::from(vec![2, 5]).is_sole_member(&2));
        assert!(!ToggleSet::<u8>::new().is_sole_member(&2));
    }

    #[test]
    fn serializes_as_sorted_list() {
        let set: ToggleSet<String> = ["d".to_string(), "b".to_string()].into_iter().collect();
        let json = serde_json::to_string(&set).expect("serialize");
        assert_eq!(json, r#"["b","d"]"#);

        let parsed: ToggleSet<String> = serde_json::from_str(r#"["d","b","d"]"#).expect("parse");
        assert_eq!(parsed, set);
    }
}
