//! Policy presets for each component that consumes the disclosure model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{SelectionMode, SelectionPolicy, ToggleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Input type rendered by a group field.
pub enum GroupFieldKind {
    /// Mutually exclusive choice.
    Radio,
    /// Independent booleans.
    Checkbox,
}

impl GroupFieldKind {
    /// HTML `type` attribute value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown group field type `{token}` (expected radio or checkbox)")]
/// Returned when a group field type token is not recognized.
pub struct ParseGroupFieldKindError {
    /// Token that failed to parse.
    pub token: String,
}

impl FromStr for GroupFieldKind {
    type Err = ParseGroupFieldKindError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "radio" => Ok(Self::Radio),
            "checkbox" => Ok(Self::Checkbox),
            _ => Err(ParseGroupFieldKindError {
                token: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Selection behaviour of list and dropdown items.
pub enum ListSelection {
    /// Items are plain rows with no selection state.
    #[default]
    None,
    /// Radio-style single choice.
    Radio,
    /// Checkbox-style multi choice.
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Every component that routes state through a [`crate::ControllerBinding`].
pub enum CallSite {
    /// Accordion or FAQ list. `allow_multiple` keeps several panels open.
    Accordion {
        /// Whether more than one item may be open.
        allow_multiple: bool,
    },
    /// Dropdown options.
    Dropdown {
        /// Checkbox-style options instead of a single choice.
        multiselect: bool,
    },
    /// Group of labelled checkboxes.
    CheckboxGroup,
    /// List or dropdown items with their own selection style.
    ListItem(ListSelection),
    /// Radio or checkbox field group.
    GroupField(GroupFieldKind),
}

impl CallSite {
    /// Policy this call site toggles through.
    ///
    /// Returns `None` for list items without selection state.
    pub fn policy(self) -> Option<SelectionPolicy> {
        match self {
            Self::Accordion {
                allow_multiple: true,
            } => Some(SelectionPolicy::independent()),
            Self::Accordion {
                allow_multiple: false,
            } => Some(SelectionPolicy::exclusive(true)),
            Self::Dropdown { multiselect: true }
            | Self::CheckboxGroup
            | Self::ListItem(ListSelection::Checkbox)
            | Self::GroupField(GroupFieldKind::Checkbox) => Some(SelectionPolicy::multi_select()),
            Self::Dropdown { multiselect: false }
            | Self::ListItem(ListSelection::Radio)
            | Self::GroupField(GroupFieldKind::Radio) => Some(SelectionPolicy::exclusive(false)),
            Self::ListItem(ListSelection::None) => None,
        }
    }

    /// Serializable configuration seeded with `default_active`.
    pub fn config<K: Ord>(self, default_active: impl IntoIterator<Item = K>) -> DisclosureConfig<K> {
        let policy = self.policy().unwrap_or_default();
        DisclosureConfig {
            mode: policy.mode(),
            closable_on_reselect: policy.closable_on_reselect(),
            default_active: default_active.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Declarative disclosure settings for fixtures and demos.
pub struct DisclosureConfig<K: Ord> {
    /// Transition rule family.
    pub mode: SelectionMode,
    /// Whether reselecting the sole active item clears it.
    #[serde(default = "default_closable")]
    pub closable_on_reselect: bool,
    /// Items active at mount.
    #[serde(default = "ToggleSet::new")]
    pub default_active: ToggleSet<K>,
}

fn default_closable() -> bool {
    true
}

impl<K: Ord> DisclosureConfig<K> {
    /// Policy described by this configuration.
    pub fn policy(&self) -> SelectionPolicy {
        SelectionPolicy::new(self.mode, self.closable_on_reselect)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accordion_policies_follow_allow_multiple() {
        assert_eq!(
            CallSite::Accordion {
                allow_multiple: true
            }
            .policy(),
            Some(SelectionPolicy::independent())
        );
        assert_eq!(
            CallSite::Accordion {
                allow_multiple: false
            }
            .policy(),
            Some(SelectionPolicy::exclusive(true))
        );
    }

    #[test]
    fn radio_style_call_sites_do_not_clear_on_reselect() {
        for site in [
            CallSite::Dropdown { multiselect: false },
            CallSite::ListItem(ListSelection::Radio),
            CallSite::GroupField(GroupFieldKind::Radio),
        ] {
            assert_eq!(site.policy(), Some(SelectionPolicy::exclusive(false)));
        }
        assert_eq!(CallSite::ListItem(ListSelection::None).policy(), None);
    }

    #[test]
    fn faq_accordion_scenario() {
        let policy = CallSite::Accordion {
            allow_multiple: false,
        }
        .policy()
        .expect("accordion policy");
        let opened = policy.apply(&ToggleSet::only(0usize), 2);
        assert_eq!(opened, ToggleSet::only(2));
        assert_eq!(policy.apply(&opened, 2), ToggleSet::new());
    }

    #[test]
    fn checkbox_group_scenario_is_order_independent() {
        let policy = CallSite::CheckboxGroup.policy().expect("checkbox policy");
        let empty = ToggleSet::<&str>::new();
        let b_then_d = policy.apply(&policy.apply(&empty, "b"), "d");
        let d_then_b = policy.apply(&policy.apply(&empty, "d"), "b");
        assert_eq!(b_then_d, ToggleSet::from(vec!["b", "d"]));
        assert_eq!(b_then_d, d_then_b);
    }

    #[test]
    fn single_select_dropdown_reselect_is_noop() {
        let policy = CallSite::Dropdown { multiselect: false }
            .policy()
            .expect("dropdown policy");
        let selected = policy.apply(&ToggleSet::new(), "x");
        assert_eq!(selected, ToggleSet::only("x"));
        assert_eq!(policy.apply(&selected, "x"), ToggleSet::only("x"));
    }

    #[test]
    fn group_field_kind_parses_case_insensitively() {
        assert_eq!("Radio".parse::<GroupFieldKind>(), Ok(GroupFieldKind::Radio));
        assert_eq!(" checkbox".parse::<GroupFieldKind>(), Ok(GroupFieldKind::Checkbox));
        let err = "switch".parse::<GroupFieldKind>().expect_err("unknown kind");
        assert_eq!(err.token, "switch");
    }

    #[test]
    fn config_round_trips_preset_policy() {
        let config = CallSite::GroupField(GroupFieldKind::Radio).config(["email".to_string()]);
        assert_eq!(config.policy(), SelectionPolicy::exclusive(false));

        let parsed: DisclosureConfig<usize> =
            serde_json::from_str(r#"{"mode":"independent","default_active":[2,0]}"#)
                .expect("parse config");
        assert_eq!(parsed.policy(), SelectionPolicy::independent());
        assert_eq!(parsed.default_active, ToggleSet::from(vec![0, 2]));
    }
}
