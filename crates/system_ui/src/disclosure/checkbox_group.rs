use disclosure_core::{CallSite, ToggleChange, ToggleSet};
use leptos::*;

use super::{change_notifier, instance_id, FieldOption, ToggleController};
use crate::primitives::{bool_token, merge_layout_class};
use crate::{CheckboxField, LayoutGap, Stack, Text, TextRole, TextTone};

/// Aggregate state of the enabled options, used by the select-all row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coverage {
    None,
    Some,
    All,
}

fn coverage(checked: &ToggleSet<String>, options: &[FieldOption]) -> Coverage {
    let enabled = options.iter().filter(|option| !option.disabled);
    let (total, active) = enabled.fold((0, 0), |(total, active), option| {
        (total + 1, active + usize::from(checked.contains(&option.value)))
    });
    match active {
        0 => Coverage::None,
        active if active == total => Coverage::All,
        _ => Coverage::Some,
    }
}

/// Requests membership for every enabled option, in option order.
fn select_all(controller: ToggleController<String>, options: &[FieldOption], include: bool) {
    for option in options.iter().filter(|option| !option.disabled) {
        controller.set_membership(option.value.clone(), include);
    }
}

fn toggle_option(
    controller: ToggleController<String>,
    option: &FieldOption,
) -> Option<ToggleChange<String>> {
    controller.toggle_enabled(option.value.clone(), option.disabled)
}

#[component]
/// Labelled set of independent checkboxes sharing one checked-values list.
///
/// `select_all_label` adds a leading row that reads as indeterminate while only
/// some options are checked and sets every enabled option when activated.
pub fn CheckboxGroup(
    #[prop(into)] label: String,
    options: Vec<FieldOption>,
    #[prop(optional, into)] checked_values: Option<Signal<Vec<String>>>,
    #[prop(optional)] default_checked: Vec<String>,
    #[prop(optional)] on_checked_change: Option<Callback<(String, bool)>>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<String>>>,
    #[prop(optional, into)] select_all_label: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let policy = CallSite::CheckboxGroup.policy().unwrap_or_default();
    let controller = ToggleController::new(
        policy,
        checked_values,
        default_checked,
        change_notifier(on_checked_change, on_value_change),
    );
    let base_id = instance_id("checkbox-group", id);
    let name = name.unwrap_or_else(|| base_id.clone());
    let options = store_value(options);

    let select_all_row = select_all_label.map(|select_all_label| {
        let state = Signal::derive(move || {
            let checked = controller.current_set();
            options
                .try_with_value(|options| coverage(&checked, options))
                .unwrap_or(Coverage::None)
        });
        view! {
            <label class="ui-checkbox-row" data-ui-slot="select-all">
                <CheckboxField
                    id=format!("{base_id}-all")
                    checked=Signal::derive(move || state.get() == Coverage::All)
                    indeterminate=Signal::derive(move || state.get() == Coverage::Some)
                    on_change=Callback::new(move |_| {
                        let include = state.get_untracked() != Coverage::All;
                        options.try_with_value(|options| select_all(controller, options, include));
                    })
                />
                <Text role=TextRole::Label>{select_all_label}</Text>
            </label>
        }
    });

    let rows = options
        .get_value()
        .into_iter()
        .enumerate()
        .map(|(index, option)| {
            let value = option.value.clone();
            let checked = {
                let value = value.clone();
                Signal::derive(move || controller.is_active(&value))
            };
            let disabled = option.disabled;
            let label = option.label.clone();
            let description = option.description.clone();
            view! {
                <label
                    class="ui-checkbox-row"
                    data-ui-slot="option"
                    data-ui-disabled=bool_token(disabled)
                >
                    <CheckboxField
                        id=format!("{base_id}-{index}")
                        name=name.clone()
                        value=value
                        checked=checked
                        disabled=disabled
                        on_change=Callback::new(move |_| {
                            toggle_option(controller, &option);
                        })
                    />
                    <Stack gap=LayoutGap::None>
                        <Text role=TextRole::Label>{label}</Text>
                        {description.map(|description| view! {
                            <Text role=TextRole::Caption tone=TextTone::Secondary>{description}</Text>
                        })}
                    </Stack>
                </label>
            }
        })
        .collect_view();

    view! {
        <fieldset
            class=merge_layout_class("ui-checkbox-group", layout_class)
            id=base_id.clone()
            data-ui-primitive="true"
            data-ui-kind="checkbox-group"
        >
            <legend data-ui-slot="legend">{label}</legend>
            {select_all_row}
            {rows}
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use disclosure_core::SelectionPolicy;

    fn options() -> Vec<FieldOption> {
        vec![
            FieldOption::new("a", "Alpha"),
            FieldOption::new("b", "Bravo"),
            FieldOption::new("c", "Charlie").disabled(),
            FieldOption::new("d", "Delta"),
        ]
    }

    fn set(values: &[&str]) -> ToggleSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn coverage_ignores_disabled_options() {
        let options = options();
        assert_eq!(coverage(&set(&[]), &options), Coverage::None);
        assert_eq!(coverage(&set(&["b", "d"]), &options), Coverage::Some);
        assert_eq!(coverage(&set(&["a", "b", "d"]), &options), Coverage::All);
        assert_eq!(coverage(&set(&["c"]), &options), Coverage::None);
    }

    #[test]
    fn toggling_b_then_d_checks_both() {
        let runtime = create_runtime();
        let controller =
            ToggleController::new(SelectionPolicy::multi_select(), None, Vec::new(), None);

        controller.toggle("b".to_string());
        controller.toggle("d".to_string());
        assert_eq!(controller.current_set(), set(&["b", "d"]));

        runtime.dispose();
    }

    #[test]
    fn select_all_requests_each_enabled_option_in_order() {
        let runtime = create_runtime();
        let owner = create_rw_signal(vec!["b".to_string()]);
        let requests = create_rw_signal(Vec::new());
        let controller = ToggleController::new(
            SelectionPolicy::multi_select(),
            Some(owner.into()),
            Vec::new(),
            Some(Callback::new(move |change: ToggleChange<String>| {
                requests.update(|requests| requests.push((change.item.clone(), change.active)));
                owner.set(change.next.into_vec());
            })),
        );

        select_all(controller, &options(), true);

        assert_eq!(
            requests.get_untracked(),
            vec![
                ("a".to_string(), true),
                ("b".to_string(), true),
                ("d".to_string(), true),
            ]
        );
        assert_eq!(controller.current_set(), set(&["a", "b", "d"]));

        select_all(controller, &options(), false);
        assert!(controller.current_set().is_empty());

        runtime.dispose();
    }

    #[test]
    fn disabled_option_row_never_toggles() {
        let runtime = create_runtime();
        let controller =
            ToggleController::new(SelectionPolicy::multi_select(), None, vec!["c".to_string()], None);
        let options = options();

        assert!(toggle_option(controller, &options[2]).is_none());
        assert_eq!(controller.current_set(), set(&["c"]));

        toggle_option(controller, &options[0]);
        assert_eq!(controller.current_set(), set(&["a", "c"]));

        runtime.dispose();
    }

    #[test]
    fn owner_applying_full_sets_follows_select_all() {
        let runtime = create_runtime();
        let owner = create_rw_signal(Vec::<String>::new());
        let controller = ToggleController::new(
            SelectionPolicy::multi_select(),
            Some(owner.into()),
            Vec::new(),
            change_notifier(
                None,
                Some(Callback::new(move |next: Vec<String>| owner.set(next))),
            ),
        );

        select_all(controller, &options(), true);
        assert_eq!(
            owner.get_untracked(),
            vec!["a".to_string(), "b".to_string(), "d".to_string()]
        );

        runtime.dispose();
    }
}
