use disclosure_core::{CallSite, ListSelection};
use leptos::*;

use super::{change_notifier, ToggleController};
use crate::primitives::{bool_token, merge_layout_class};
use crate::{Button, ButtonVariant, Icon, IconName, IconSize};

#[derive(Clone, Copy)]
struct ListContext {
    selection: ListSelection,
    controller: Option<ToggleController<String>>,
}

impl ListContext {
    fn new(
        selection: ListSelection,
        value: Option<Signal<Vec<String>>>,
        default_value: Vec<String>,
        on_change: Option<Callback<(String, bool)>>,
        on_change_set: Option<Callback<Vec<String>>>,
    ) -> Self {
        let controller = CallSite::ListItem(selection).policy().map(|policy| {
            ToggleController::new(
                policy,
                value,
                default_value,
                change_notifier(on_change, on_change_set),
            )
        });
        Self {
            selection,
            controller,
        }
    }
}

fn group_role(selection: ListSelection) -> &'static str {
    match selection {
        ListSelection::None => "list",
        ListSelection::Radio => "radiogroup",
        ListSelection::Checkbox => "group",
    }
}

fn item_role(selection: ListSelection) -> &'static str {
    match selection {
        ListSelection::None => "listitem",
        ListSelection::Radio => "radio",
        ListSelection::Checkbox => "checkbox",
    }
}

#[component]
/// Vertical list whose [`ListItem`] rows may be radio- or checkbox-selectable.
pub fn ListGroup(
    #[prop(optional)] selection: ListSelection,
    #[prop(optional, into)] value: Option<Signal<Vec<String>>>,
    #[prop(optional)] default_value: Vec<String>,
    #[prop(optional)] on_change: Option<Callback<(String, bool)>>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<String>>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    if selection == ListSelection::None && value.is_some() {
        logging::warn!("ListGroup without selection ignores its `value` prop");
    }
    provide_context(ListContext::new(
        selection,
        value,
        default_value,
        on_change,
        on_value_change,
    ));

    view! {
        <div
            class=merge_layout_class("ui-list", layout_class)
            role=group_role(selection)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="list"
        >
            {children()}
        </div>
    }
}

#[component]
/// Row of a [`ListGroup`].
///
/// Selectable rows render as buttons carrying `role="radio"` or
/// `role="checkbox"` and `aria-checked`; plain rows render as list items.
pub fn ListItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let context = use_context::<ListContext>();
    let selection = context
        .map(|context| context.selection)
        .unwrap_or_default();
    let description =
        description.map(|description| view! { <span data-ui-slot="description">{description}</span> });

    let Some(controller) = context.and_then(|context| context.controller) else {
        return view! {
            <div
                class="ui-list-item"
                role=item_role(selection)
                data-ui-kind="list-item"
                data-ui-value=value
            >
                <span data-ui-slot="label">{children()}</span>
                {description}
            </div>
        }
        .into_view();
    };

    let disabled = Signal::derive(move || disabled.get());
    let checked = {
        let value = value.clone();
        Signal::derive(move || controller.is_active(&value))
    };

    view! {
        <Button
            variant=ButtonVariant::Quiet
            layout_class="ui-list-item"
            role=item_role(selection)
            aria_checked=Signal::derive(move || bool_token(checked.get()).to_string())
            selected=checked
            disabled=disabled
            on_click=Callback::new(move |_| {
                controller.toggle_enabled(value.clone(), disabled.get_untracked());
            })
        >
            <span data-ui-slot="indicator" aria-hidden="true">
                {move || checked.get().then(|| view! { <Icon icon=IconName::Checkmark size=IconSize::Xs /> })}
            </span>
            <span data-ui-slot="label">{children()}</span>
            {description}
        </Button>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use disclosure_core::ToggleSet;

    #[test]
    fn plain_lists_have_no_controller() {
        let runtime = create_runtime();
        let context = ListContext::new(ListSelection::None, None, vec!["a".to_string()], None, None);
        assert!(context.controller.is_none());
        assert_eq!(item_role(context.selection), "listitem");

        runtime.dispose();
    }

    #[test]
    fn radio_list_keeps_one_selection() {
        let runtime = create_runtime();
        let context = ListContext::new(ListSelection::Radio, None, Vec::new(), None, None);
        let controller = context.controller.expect("radio list is selectable");

        controller.toggle("inbox".to_string());
        controller.toggle("inbox".to_string());
        assert_eq!(controller.current_set(), ToggleSet::only("inbox".to_string()));
        controller.toggle("archive".to_string());
        assert_eq!(controller.current_set(), ToggleSet::only("archive".to_string()));
        assert_eq!(group_role(context.selection), "radiogroup");

        runtime.dispose();
    }

    #[test]
    fn checkbox_list_reports_changes_to_owner() {
        let runtime = create_runtime();
        let owner = create_rw_signal(vec!["a".to_string()]);
        let reports = create_rw_signal(Vec::new());
        let context = ListContext::new(
            ListSelection::Checkbox,
            Some(owner.into()),
            Vec::new(),
            Some(Callback::new(move |report: (String, bool)| {
                reports.update(|reports| reports.push(report));
            })),
            None,
        );
        let controller = context.controller.expect("checkbox list is selectable");

        controller.toggle("a".to_string());
        controller.toggle("b".to_string());
        assert_eq!(
            reports.get_untracked(),
            vec![("a".to_string(), false), ("b".to_string(), true)]
        );
        assert_eq!(controller.current_set(), ToggleSet::only("a".to_string()));

        runtime.dispose();
    }

    #[test]
    fn disabled_row_keeps_radio_selection() {
        let runtime = create_runtime();
        let owner = create_rw_signal(vec!["inbox".to_string()]);
        let context = ListContext::new(
            ListSelection::Radio,
            Some(owner.into()),
            Vec::new(),
            None,
            Some(Callback::new(move |next: Vec<String>| owner.set(next))),
        );
        let controller = context.controller.expect("radio list is selectable");

        assert!(controller.toggle_enabled("spam".to_string(), true).is_none());
        assert_eq!(owner.get_untracked(), vec!["inbox".to_string()]);

        controller.toggle_enabled("archive".to_string(), false);
        assert_eq!(owner.get_untracked(), vec!["archive".to_string()]);

        runtime.dispose();
    }
}
