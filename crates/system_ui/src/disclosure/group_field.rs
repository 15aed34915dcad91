use disclosure_core::{CallSite, GroupFieldKind};
use leptos::*;

use super::{change_notifier, instance_id, FieldOption, ToggleController};
use crate::primitives::{bool_token, merge_layout_class};
use crate::{CheckboxField, RadioField, Text, TextRole, TextTone};

fn field_controller(
    kind: GroupFieldKind,
    value: Option<Signal<Vec<String>>>,
    default_value: Vec<String>,
    on_change: Option<Callback<(String, bool)>>,
    on_change_set: Option<Callback<Vec<String>>>,
) -> ToggleController<String> {
    let policy = CallSite::GroupField(kind).policy().unwrap_or_default();
    ToggleController::new(
        policy,
        value,
        default_value,
        change_notifier(on_change, on_change_set),
    )
}

#[component]
/// Fieldset of radio or checkbox inputs sharing one `name`.
///
/// `kind` decides the transition rule: radio fields keep exactly one value
/// once chosen, checkbox fields toggle each option on its own.
pub fn GroupField(
    kind: GroupFieldKind,
    #[prop(into)] legend: String,
    options: Vec<FieldOption>,
    #[prop(optional, into)] value: Option<Signal<Vec<String>>>,
    #[prop(optional)] default_value: Vec<String>,
    #[prop(optional)] on_change: Option<Callback<(String, bool)>>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<String>>>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let controller = field_controller(kind, value, default_value, on_change, on_value_change);
    let base_id = instance_id("group-field", name.clone());
    let name = name.unwrap_or_else(|| base_id.clone());
    let group_disabled = Signal::derive(move || disabled.get());

    let rows = options
        .into_iter()
        .enumerate()
        .map(|(index, option)| {
            let input_id = format!("{base_id}-{index}");
            let option_disabled = option.disabled;
            let disabled = Signal::derive(move || option_disabled || group_disabled.get());
            let checked = {
                let value = option.value.clone();
                Signal::derive(move || controller.is_active(&value))
            };
            let toggled = option.value.clone();
            let on_change = Callback::new(move |_| {
                controller.toggle_enabled(toggled.clone(), disabled.get_untracked());
            });
            let input = match kind {
                GroupFieldKind::Radio => view! {
                    <RadioField
                        id=input_id.clone()
                        name=name.clone()
                        value=option.value.clone()
                        checked=checked
                        disabled=disabled
                        on_change=on_change
                    />
                }
                .into_view(),
                GroupFieldKind::Checkbox => view! {
                    <CheckboxField
                        id=input_id.clone()
                        name=name.clone()
                        value=option.value.clone()
                        checked=checked
                        disabled=disabled
                        on_change=on_change
                    />
                }
                .into_view(),
            };

            view! {
                <div
                    class="ui-group-field-option"
                    data-ui-slot="option"
                    data-ui-disabled=move || bool_token(disabled.get())
                >
                    {input}
                    <label for=input_id>
                        <Text role=TextRole::Label>{option.label}</Text>
                    </label>
                    {option.description.map(|description| view! {
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{description}</Text>
                    })}
                </div>
            }
        })
        .collect_view();

    view! {
        <fieldset
            class=merge_layout_class("ui-group-field", layout_class)
            id=base_id.clone()
            disabled=move || group_disabled.get()
            data-ui-primitive="true"
            data-ui-kind="group-field"
            data-ui-variant=kind.token()
        >
            <legend data-ui-slot="legend">{legend}</legend>
            {description.map(|description| view! {
                <Text role=TextRole::Caption tone=TextTone::Secondary ui_slot="description">{description}</Text>
            })}
            {rows}
        </fieldset>
    }
}
