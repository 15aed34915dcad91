use disclosure_core::{CallSite, SelectionPolicy, ToggleChange, ToggleSet};
use leptos::ev::KeyboardEvent;
use leptos::*;

use super::{change_notifier, instance_id, ToggleController};
use crate::primitives::{bool_token, merge_layout_class};
use crate::{Button, ButtonVariant, Icon, IconName, IconSize, MenuSurface};

#[derive(Clone, Copy)]
struct DropdownContext {
    selection: ToggleController<String>,
    panel: ToggleController<()>,
    multiselect: bool,
}

impl DropdownContext {
    #[allow(clippy::too_many_arguments)]
    fn new(
        multiselect: bool,
        checked_values: Option<Signal<Vec<String>>>,
        default_checked: Vec<String>,
        on_checked_change: Option<Callback<(String, bool)>>,
        on_value_change: Option<Callback<Vec<String>>>,
        open: Option<Signal<bool>>,
        default_open: bool,
        on_open_change: Option<Callback<bool>>,
    ) -> Self {
        let policy = CallSite::Dropdown { multiselect }
            .policy()
            .unwrap_or_default();
        let selection = ToggleController::new(
            policy,
            checked_values,
            default_checked,
            change_notifier(on_checked_change, on_value_change),
        );

        let panel = ToggleController::new(
            SelectionPolicy::exclusive(true),
            open.map(|open| Signal::derive(move || panel_items(open.get()))),
            panel_items(default_open),
            on_open_change.map(|on_open_change| {
                Callback::new(move |change: ToggleChange<()>| {
                    on_open_change.call(change.active)
                })
            }),
        );

        Self {
            selection,
            panel,
            multiselect,
        }
    }

    fn is_open(&self) -> bool {
        self.panel.is_active(&())
    }

    fn close(&self) {
        if self.panel.current_set().contains(&()) {
            self.panel.set_membership((), false);
        }
    }

    /// Applies an item choice. Disabled items neither select nor close.
    fn choose(&self, value: String, disabled: bool) -> bool {
        if self.selection.toggle_enabled(value, disabled).is_none() {
            return false;
        }
        if !self.multiselect {
            self.close();
        }
        true
    }

    fn handle_key(&self, key: &str) -> bool {
        match key {
            "Escape" => {
                self.close();
                true
            }
            _ => false,
        }
    }
}

fn panel_items(open: bool) -> Vec<()> {
    if open {
        vec![()]
    } else {
        Vec::new()
    }
}

/// Text shown on the trigger for the current selection.
fn selection_summary(checked: &ToggleSet<String>, placeholder: &str) -> String {
    match checked.len() {
        0 => placeholder.to_string(),
        1 => checked.iter().next().cloned().unwrap_or_default(),
        count => format!("{count} selected"),
    }
}

#[component]
/// Trigger button with a popup list of [`DropdownItem`] choices.
///
/// Single-select dropdowns keep exactly one value once chosen and close after
/// each choice. `multiselect` switches to independent checkbox items and keeps
/// the panel open. The panel's open state is itself a one-item disclosure and
/// may be controlled separately through `open`/`on_open_change`.
pub fn Dropdown(
    #[prop(into)] label: String,
    #[prop(optional)] multiselect: bool,
    #[prop(optional, into)] checked_values: Option<Signal<Vec<String>>>,
    #[prop(optional)] default_checked: Vec<String>,
    #[prop(optional)] on_checked_change: Option<Callback<(String, bool)>>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<String>>>,
    #[prop(optional, into)] open: Option<Signal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let context = DropdownContext::new(
        multiselect,
        checked_values,
        default_checked,
        on_checked_change,
        on_value_change,
        open,
        default_open,
        on_open_change,
    );
    provide_context(context);

    let base_id = instance_id("dropdown", id);
    let trigger_id = format!("{base_id}-trigger");
    let panel_id = format!("{base_id}-panel");
    let panel_labelledby = trigger_id.clone();
    let panel_dom_id = panel_id.clone();
    let placeholder = placeholder.unwrap_or_else(|| label.clone());
    let disabled = Signal::derive(move || disabled.get());
    let expanded = Signal::derive(move || context.is_open());
    let trigger_label = label.clone();

    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
        if context.handle_key(&ev.key()) {
            ev.prevent_default();
        }
    });
    let panel = move || {
        let children = children.clone();
        view! {
            <MenuSurface
                id=panel_dom_id.clone()
                role="menu"
                aria_labelledby=panel_labelledby.clone()
                aria_multiselectable=multiselect
            >
                {children()}
            </MenuSurface>
        }
        .into_view()
    };

    view! {
        <div
            class=merge_layout_class("ui-dropdown", layout_class)
            id=base_id
            data-ui-primitive="true"
            data-ui-kind="dropdown"
            data-ui-state=move || if expanded.get() { "open" } else { "closed" }
            data-ui-multiple=bool_token(multiselect)
            on:keydown=move |ev| on_keydown.call(ev)
        >
            <Button
                variant=ButtonVariant::Secondary
                layout_class="ui-dropdown-trigger"
                id=trigger_id
                aria_label=trigger_label
                aria_haspopup="menu"
                aria_controls=panel_id
                aria_expanded=expanded
                pressed=expanded
                disabled=disabled
                ui_slot="trigger"
                on_click=Callback::new(move |_| {
                    context.panel.toggle_enabled((), disabled.get_untracked());
                })
            >
                <span data-ui-slot="label">{label}</span>
                <span data-ui-slot="value">
                    {move || selection_summary(&context.selection.current_set(), &placeholder)}
                </span>
                <Icon icon=IconName::ChevronDown size=IconSize::Sm />
            </Button>
            {move || expanded.get().then(|| panel())}
        </div>
    }
}

#[component]
/// One choice inside a [`Dropdown`].
///
/// Renders as `menuitemradio` or `menuitemcheckbox` depending on the parent.
pub fn DropdownItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let Some(context) = use_context::<DropdownContext>() else {
        logging::warn!("DropdownItem `{value}` rendered outside a Dropdown");
        return ().into_view();
    };

    let disabled = Signal::derive(move || disabled.get());
    let checked = {
        let value = value.clone();
        Signal::derive(move || context.selection.is_active(&value))
    };
    let role = if context.multiselect {
        "menuitemcheckbox"
    } else {
        "menuitemradio"
    };

    view! {
        <Button
            variant=ButtonVariant::Quiet
            layout_class="ui-dropdown-item"
            role=role
            aria_checked=Signal::derive(move || bool_token(checked.get()).to_string())
            selected=checked
            disabled=disabled
            on_click=Callback::new(move |_| {
                context.choose(value.clone(), disabled.get_untracked());
            })
        >
            <span data-ui-slot="indicator" aria-hidden="true">
                {move || checked.get().then(|| view! { <Icon icon=IconName::Checkmark size=IconSize::Xs /> })}
            </span>
            <span data-ui-slot="label">{children()}</span>
        </Button>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn uncontrolled(multiselect: bool) -> DropdownContext {
        DropdownContext::new(multiselect, None, Vec::new(), None, None, None, true, None)
    }

    #[test]
    fn single_select_reselect_keeps_value_and_closes_panel() {
        let runtime = create_runtime();
        let context = uncontrolled(false);

        context.choose("x".to_string(), false);
        assert_eq!(context.selection.current_set(), ToggleSet::only("x".to_string()));
        assert!(!context.is_open());

        context.panel.toggle(());
        context.choose("x".to_string(), false);
        assert_eq!(context.selection.current_set(), ToggleSet::only("x".to_string()));

        context.choose("y".to_string(), false);
        assert_eq!(context.selection.current_set(), ToggleSet::only("y".to_string()));

        runtime.dispose();
    }

    #[test]
    fn multiselect_keeps_panel_open() {
        let runtime = create_runtime();
        let context = uncontrolled(true);

        context.choose("b".to_string(), false);
        context.choose("d".to_string(), false);
        assert!(context.is_open());
        assert_eq!(
            context.selection.current_set(),
            ToggleSet::from(vec!["b".to_string(), "d".to_string()])
        );

        context.choose("b".to_string(), false);
        assert_eq!(context.selection.current_set(), ToggleSet::only("d".to_string()));

        runtime.dispose();
    }

    #[test]
    fn controlled_panel_reports_open_changes_to_owner() {
        let runtime = create_runtime();
        let open = create_rw_signal(false);
        let context = DropdownContext::new(
            false,
            None,
            Vec::new(),
            None,
            None,
            Some(open.into()),
            true,
            Some(Callback::new(move |next: bool| open.set(next))),
        );

        assert!(!context.is_open());
        context.panel.toggle(());
        assert!(open.get_untracked());
        assert!(context.is_open());

        context.choose("x".to_string(), false);
        assert!(!open.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn summary_lists_single_value_or_count() {
        let placeholder = "Choose a size";
        assert_eq!(selection_summary(&ToggleSet::new(), placeholder), placeholder);
        assert_eq!(
            selection_summary(&ToggleSet::only("m".to_string()), placeholder),
            "m"
        );
        assert_eq!(
            selection_summary(
                &ToggleSet::from(vec!["s".to_string(), "l".to_string()]),
                placeholder
            ),
            "2 selected"
        );
    }

    #[test]
    fn disabled_item_neither_selects_nor_closes() {
        let runtime = create_runtime();
        let context = uncontrolled(false);

        assert!(!context.choose("x".to_string(), true));
        assert!(context.selection.current_set().is_empty());
        assert!(context.is_open());

        assert!(context.choose("x".to_string(), false));
        assert!(!context.is_open());

        runtime.dispose();
    }

    #[test]
    fn escape_closes_panel_and_other_keys_do_not() {
        let runtime = create_runtime();
        let context = uncontrolled(true);

        assert!(!context.handle_key("Enter"));
        assert!(context.is_open());
        assert!(context.handle_key("Escape"));
        assert!(!context.is_open());

        assert!(context.handle_key("Escape"));
        assert!(!context.is_open());

        runtime.dispose();
    }

    #[test]
    fn controlled_selection_reports_full_set() {
        let runtime = create_runtime();
        let checked = create_rw_signal(vec!["s".to_string()]);
        let context = DropdownContext::new(
            false,
            Some(checked.into()),
            Vec::new(),
            None,
            Some(Callback::new(move |next: Vec<String>| checked.set(next))),
            None,
            true,
            None,
        );

        context.choose("l".to_string(), false);
        assert_eq!(checked.get_untracked(), vec!["l".to_string()]);
        assert_eq!(context.selection.current_set(), ToggleSet::only("l".to_string()));

        runtime.dispose();
    }
}
