//! Selection disciplines answering "what is the set after toggling this item".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ToggleSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Transition rule family used by a [`SelectionPolicy`].
pub enum SelectionMode {
    /// Every item opens and closes on its own (multi-open FAQ).
    Independent,
    /// At most one item is active (accordion, radio, single-select dropdown).
    ExclusiveSingle,
    /// Any subset may be checked (checkbox group, multiselect dropdown).
    MultiSelect,
}

impl SelectionMode {
    /// Stable kebab-case token for this mode.
    pub fn token(self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::ExclusiveSingle => "exclusive-single",
            Self::MultiSelect => "multi-select",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Returned when a selection-mode token is not recognized.
#[error("unknown selection mode `{token}` (expected independent, exclusive-single, or multi-select)")]
pub struct ParseSelectionModeError {
    /// Token that failed to parse.
    pub token: String,
}

impl FromStr for SelectionMode {
    type Err = ParseSelectionModeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "independent" => Ok(Self::Independent),
            "exclusive-single" => Ok(Self::ExclusiveSingle),
            "multi-select" => Ok(Self::MultiSelect),
            other => Err(ParseSelectionModeError {
                token: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PolicyFields")]
/// Stateless transition rule applied to a [`ToggleSet`] on every toggle request.
///
/// Policies have no knowledge of which items exist; call sites only emit
/// toggles for items they rendered. The empty set is a valid state under every
/// mode.
pub struct SelectionPolicy {
    mode: SelectionMode,
    closable_on_reselect: bool,
}

#[derive(Deserialize)]
struct PolicyFields {
    mode: SelectionMode,
    #[serde(default = "reselect_closes")]
    closable_on_reselect: bool,
}

fn reselect_closes() -> bool {
    true
}

impl From<PolicyFields> for SelectionPolicy {
    fn from(fields: PolicyFields) -> Self {
        Self::new(fields.mode, fields.closable_on_reselect)
    }
}

impl SelectionPolicy {
    /// Each item toggles independently.
    pub const fn independent() -> Self {
        Self {
            mode: SelectionMode::Independent,
            closable_on_reselect: true,
        }
    }

    /// At most one active item.
    ///
    /// With `closable_on_reselect` toggling the open item closes it (accordion);
    /// without it re-selecting the chosen item is a no-op (radio).
    pub const fn exclusive(closable_on_reselect: bool) -> Self {
        Self {
            mode: SelectionMode::ExclusiveSingle,
            closable_on_reselect,
        }
    }

    /// Unconstrained set of independent checks.
    pub const fn multi_select() -> Self {
        Self {
            mode: SelectionMode::MultiSelect,
            closable_on_reselect: true,
        }
    }

    /// Builds a policy from a mode and reselect flag.
    ///
    /// The flag only affects [`SelectionMode::ExclusiveSingle`].
    pub const fn new(mode: SelectionMode, closable_on_reselect: bool) -> Self {
        match mode {
            SelectionMode::Independent => Self::independent(),
            SelectionMode::ExclusiveSingle => Self::exclusive(closable_on_reselect),
            SelectionMode::MultiSelect => Self::multi_select(),
        }
    }

    /// Transition rule family.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Whether toggling the sole active item clears it.
    pub fn closable_on_reselect(&self) -> bool {
        self.closable_on_reselect
    }

    /// Returns the set that results from toggling `item`.
    ///
    /// Under [`SelectionMode::ExclusiveSingle`] a set holding more than one item
    /// (unreachable through this policy) collapses to `{item}`.
    pub fn apply<K: Ord + Clone>(&self, set: &ToggleSet<K>, item: K) -> ToggleSet<K> {
        match self.mode {
            SelectionMode::Independent | SelectionMode::MultiSelect => {
                let include = !set.contains(&item);
                set.toggled(item, include)
            }
            SelectionMode::ExclusiveSingle => {
                if !set.is_sole_member(&item) {
                    ToggleSet::only(item)
                } else if self.closable_on_reselect {
                    ToggleSet::new()
                } else {
                    set.clone()
                }
            }
        }
    }

    /// Returns the set that results from asking for `item` to be present iff
    /// `include`.
    ///
    /// Used by controls whose events already carry the intended state, such as
    /// a checkbox `change` event.
    pub fn apply_membership<K: Ord + Clone>(
        &self,
        set: &ToggleSet<K>,
        item: K,
        include: bool,
    ) -> ToggleSet<K> {
        match self.mode {
            SelectionMode::Independent | SelectionMode::MultiSelect => set.toggled(item, include),
            SelectionMode::ExclusiveSingle if include => ToggleSet::only(item),
            SelectionMode::ExclusiveSingle => {
                if self.closable_on_reselect && set.contains(&item) {
                    ToggleSet::new()
                } else {
                    set.clone()
                }
            }
        }
    }

    /// Returns `true` when `set` satisfies this policy's size constraint.
    pub fn admits<K: Ord>(&self, set: &ToggleSet<K>) -> bool {
        match self.mode {
            SelectionMode::ExclusiveSingle => set.len() <= 1,
            SelectionMode::Independent | SelectionMode::MultiSelect => true,
        }
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::independent()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn set(items: &[u32]) -> ToggleSet<u32> {
        items.iter().copied().collect()
    }

    #[test]
    fn independent_toggle_flips_only_target_membership() {
        let policy = SelectionPolicy::independent();
        assert_eq!(policy.apply(&set(&[1, 3]), 2), set(&[1, 2, 3]));
        assert_eq!(policy.apply(&set(&[1, 2, 3]), 2), set(&[1, 3]));
    }

    #[test]
    fn independent_and_multi_select_share_transition_rule() {
        let start = set(&[5, 8]);
        for item in [1, 5, 8, 13] {
            assert_eq!(
                SelectionPolicy::independent().apply(&start, item),
                SelectionPolicy::multi_select().apply(&start, item)
            );
        }
    }

    #[test]
    fn toggles_commute_under_independent_and_multi_select() {
        for policy in [
            SelectionPolicy::independent(),
            SelectionPolicy::multi_select(),
        ] {
            let start = set(&[7]);
            let a_then_b = policy.apply(&policy.apply(&start, 1), 2);
            let b_then_a = policy.apply(&policy.apply(&start, 2), 1);
            assert_eq!(a_then_b, b_then_a);
            assert_eq!(a_then_b, set(&[1, 2, 7]));
        }
    }

    #[test]
    fn exclusive_switches_to_new_item() {
        let policy = SelectionPolicy::exclusive(true);
        assert_eq!(policy.apply(&set(&[0]), 2), set(&[2]));
        assert_eq!(policy.apply(&set(&[]), 4), set(&[4]));
    }

    #[test]
    fn exclusive_reselect_honors_closable_flag() {
        assert_eq!(SelectionPolicy::exclusive(true).apply(&set(&[2]), 2), set(&[]));
        assert_eq!(SelectionPolicy::exclusive(false).apply(&set(&[2]), 2), set(&[2]));
    }

    #[test]
    fn exclusive_collapses_invalid_multi_member_set() {
        let invalid = set(&[1, 2, 3]);
        assert_eq!(SelectionPolicy::exclusive(true).apply(&invalid, 2), set(&[2]));
        assert_eq!(SelectionPolicy::exclusive(false).apply(&invalid, 9), set(&[9]));
    }

    #[test]
    fn exclusive_never_exceeds_one_member_over_any_sequence() {
        let sequence = [3, 3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 5, 8, 9, 7, 9];
        for closable in [true, false] {
            let policy = SelectionPolicy::exclusive(closable);
            let mut current = ToggleSet::new();
            for item in sequence {
                current = policy.apply(&current, item);
                assert!(policy.admits(&current), "{current:?} after {item}");
            }
        }
    }

    #[test]
    fn membership_requests_for_absent_items_are_noops() {
        for policy in [
            SelectionPolicy::independent(),
            SelectionPolicy::exclusive(true),
            SelectionPolicy::exclusive(false),
            SelectionPolicy::multi_select(),
        ] {
            let start = set(&[4]);
            assert_eq!(policy.apply_membership(&start, 11, false), start);
        }
    }

    #[test]
    fn exclusive_membership_requests() {
        let accordion = SelectionPolicy::exclusive(true);
        let radio = SelectionPolicy::exclusive(false);

        assert_eq!(accordion.apply_membership(&set(&[1]), 3, true), set(&[3]));
        assert_eq!(accordion.apply_membership(&set(&[3]), 3, false), set(&[]));
        assert_eq!(radio.apply_membership(&set(&[3]), 3, false), set(&[3]));
        assert_eq!(radio.apply_membership(&set(&[3]), 3, true), set(&[3]));
    }

    #[test]
    fn mode_tokens_parse_and_render() {
        for mode in [
            SelectionMode::Independent,
            SelectionMode::ExclusiveSingle,
            SelectionMode::MultiSelect,
        ] {
            assert_eq!(mode.to_string().parse::<SelectionMode>(), Ok(mode));
        }
        assert_eq!(
            " exclusive-single ".parse::<SelectionMode>(),
            Ok(SelectionMode::ExclusiveSingle)
        );

        let err = "radio".parse::<SelectionMode>().expect_err("unknown token");
        assert_eq!(err.token, "radio");
        assert!(err.to_string().contains("unknown selection mode `radio`"));
    }

    #[test]
    fn policy_deserializes_from_kebab_case_mode() {
        let policy: SelectionPolicy =
            serde_json::from_str(r#"{"mode":"exclusive-single","closable_on_reselect":false}"#)
                .expect("parse policy");
        assert_eq!(policy, SelectionPolicy::exclusive(false));
    }

    #[test]
    fn deserialized_policy_ignores_reselect_flag_outside_exclusive_mode() {
        let policy: SelectionPolicy =
            serde_json::from_str(r#"{"mode":"independent","closable_on_reselect":false}"#)
                .expect("parse policy");
        assert_eq!(policy, SelectionPolicy::independent());

        let policy: SelectionPolicy =
            serde_json::from_str(r#"{"mode":"exclusive-single"}"#).expect("parse policy");
        assert_eq!(policy, SelectionPolicy::exclusive(true));
    }
}
