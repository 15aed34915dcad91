//! Stateful disclosure and selection components built on `disclosure_core`.
//!
//! Every component here routes its toggles through a [`ToggleController`], so
//! each one can be driven by the parent (pass the value prop and a change
//! callback) or left to manage itself (pass only the default prop).

use std::sync::atomic::{AtomicUsize, Ordering};

use disclosure_core::ToggleChange;
use leptos::{Callable, Callback};
use serde::{Deserialize, Serialize};

mod accordion;
mod checkbox_group;
mod controller;
mod dropdown;
mod group_field;
mod list;

pub use accordion::{Accordion, AccordionItem, Faq, FaqEntry};
pub use checkbox_group::CheckboxGroup;
pub use controller::ToggleController;
pub use dropdown::{Dropdown, DropdownItem};
pub use group_field::GroupField;
pub use list::{ListGroup, ListItem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable option rendered by checkbox groups and group fields.
pub struct FieldOption {
    /// Value reported through change callbacks.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Optional helper copy under the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Disabled options render but never toggle.
    #[serde(default)]
    pub disabled: bool,
}

impl FieldOption {
    /// Enabled option without helper copy.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            disabled: false,
        }
    }

    /// Adds helper copy.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the option disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// DOM id for a component instance when the caller did not supply one.
fn instance_id(prefix: &str, id: Option<String>) -> String {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    id.unwrap_or_else(|| format!("{prefix}-{}", NEXT.fetch_add(1, Ordering::Relaxed)))
}

/// Adapts a component's change callbacks to the controller notifier.
///
/// `on_item` receives the toggled item and its new membership, `on_set` the
/// full next set in order.
fn change_notifier<K: Ord + Clone + 'static>(
    on_item: Option<Callback<(K, bool)>>,
    on_set: Option<Callback<Vec<K>>>,
) -> Option<Callback<ToggleChange<K>>> {
    if on_item.is_none() && on_set.is_none() {
        return None;
    }
    Some(Callback::new(move |change: ToggleChange<K>| {
        let ToggleChange { item, active, next } = change;
        if let Some(on_item) = on_item {
            on_item.call((item, active));
        }
        if let Some(on_set) = on_set {
            on_set.call(next.into_vec());
        }
    }))
}

#[cfg(test)]
mod tests {
    use leptos::{create_runtime, create_rw_signal, SignalGetUntracked, SignalUpdate};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn explicit_instance_ids_are_kept() {
        assert_eq!(instance_id("faq", Some("billing".to_string())), "billing");
        let generated = instance_id("faq", None);
        assert!(generated.starts_with("faq-"));
        assert_ne!(generated, instance_id("faq", None));
    }

    #[test]
    fn field_options_parse_with_optional_fields() {
        let options: Vec<FieldOption> = serde_json::from_str(
            r#"[
                {"value": "email", "label": "Email"},
                {"value": "sms", "label": "SMS", "description": "Carrier rates apply", "disabled": true}
            ]"#,
        )
        .expect("parse options");

        assert_eq!(
            options,
            vec![
                FieldOption::new("email", "Email"),
                FieldOption::new("sms", "SMS")
                    .with_description("Carrier rates apply")
                    .disabled(),
            ]
        );
    }

    #[test]
    fn change_notifier_reports_item_then_full_set() {
        let runtime = create_runtime();
        let items = create_rw_signal(Vec::<(usize, bool)>::new());
        let sets = create_rw_signal(Vec::<Vec<usize>>::new());
        let notifier = change_notifier(
            Some(Callback::new(move |report: (usize, bool)| {
                items.update(|items| items.push(report));
            })),
            Some(Callback::new(move |next: Vec<usize>| {
                sets.update(|sets| sets.push(next));
            })),
        )
        .expect("callbacks supplied");

        notifier.call(ToggleChange {
            item: 2,
            active: true,
            next: vec![0, 2].into_iter().collect(),
        });

        assert_eq!(items.get_untracked(), vec![(2, true)]);
        assert_eq!(sets.get_untracked(), vec![vec![0, 2]]);
        assert!(change_notifier::<usize>(None, None).is_none());

        runtime.dispose();
    }
}
