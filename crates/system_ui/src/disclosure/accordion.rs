use disclosure_core::CallSite;
use leptos::*;
use serde::{Deserialize, Serialize};

use super::{change_notifier, instance_id, ToggleController};
use crate::primitives::{bool_token, merge_layout_class};
use crate::{Button, ButtonVariant, Heading, Icon, IconName, IconSize};

#[derive(Clone, Copy)]
struct AccordionContext {
    controller: ToggleController<usize>,
    base_id: StoredValue<String>,
}

fn accordion_context(
    id: Option<String>,
    allow_multiple: bool,
    open: Option<Signal<Vec<usize>>>,
    default_open: Vec<usize>,
    on_change: Option<Callback<(usize, bool)>>,
    on_change_set: Option<Callback<Vec<usize>>>,
) -> AccordionContext {
    let policy = CallSite::Accordion { allow_multiple }
        .policy()
        .unwrap_or_default();
    let context = AccordionContext {
        controller: ToggleController::new(
            policy,
            open,
            default_open,
            change_notifier(on_change, on_change_set),
        ),
        base_id: store_value(instance_id("accordion", id)),
    };
    provide_context(context);
    context
}

#[component]
/// Stack of collapsible sections keyed by item index.
///
/// Passing `open` hands ownership of the open set to the caller, who must
/// apply each `on_open_change(index, open)` report or the full next set from
/// `on_value_change`. Otherwise the accordion
/// starts from `default_open` and tracks its own state.
pub fn Accordion(
    /// Keep several sections open at once.
    #[prop(optional)]
    allow_multiple: bool,
    #[prop(optional, into)] open: Option<Signal<Vec<usize>>>,
    #[prop(optional)] default_open: Vec<usize>,
    #[prop(optional)] on_open_change: Option<Callback<(usize, bool)>>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<usize>>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let context = accordion_context(
        id,
        allow_multiple,
        open,
        default_open,
        on_open_change,
        on_value_change,
    );
    view! {
        <div
            class=merge_layout_class("ui-accordion", layout_class)
            id=context.base_id.get_value()
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="accordion"
            data-ui-multiple=bool_token(allow_multiple)
        >
            {children()}
        </div>
    }
}

#[component]
/// One header and collapsible region inside an [`Accordion`] or [`Faq`].
pub fn AccordionItem(
    index: usize,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let Some(context) = use_context::<AccordionContext>() else {
        logging::warn!("AccordionItem `{title}` rendered outside an Accordion");
        return ().into_view();
    };

    let controller = context.controller;
    let disabled = Signal::derive(move || disabled.get());
    let expanded = Signal::derive(move || controller.is_active(&index));
    let base_id = context.base_id.get_value();
    let header_id = format!("{base_id}-header-{index}");
    let region_id = format!("{base_id}-region-{index}");
    let region_labelledby = header_id.clone();
    let region_dom_id = region_id.clone();

    view! {
        <div
            class="ui-accordion-item"
            data-ui-kind="accordion-item"
            data-ui-state=move || if expanded.get() { "open" } else { "closed" }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <h3 data-ui-slot="heading">
                <Button
                    variant=ButtonVariant::Quiet
                    layout_class="ui-accordion-trigger"
                    id=header_id
                    aria_controls=region_id
                    aria_expanded=expanded
                    selected=expanded
                    disabled=disabled
                    ui_slot="trigger"
                    on_click=Callback::new(move |_| {
                        controller.toggle_enabled(index, disabled.get_untracked());
                    })
                >
                    <span data-ui-slot="title">{title}</span>
                    {move || {
                        let icon = if expanded.get() {
                            IconName::ChevronUp
                        } else {
                            IconName::ChevronDown
                        };
                        view! { <Icon icon size=IconSize::Sm /> }
                    }}
                </Button>
            </h3>
            <Show when=move || expanded.get()>
                <div
                    id=region_dom_id.clone()
                    role="region"
                    aria-labelledby=region_labelledby.clone()
                    data-ui-slot="region"
                >
                    {description
                        .clone()
                        .map(|description| view! { <p data-ui-slot="description">{description}</p> })}
                    {children()}
                </div>
            </Show>
        </div>
    }
    .into_view()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Question and answer pair rendered by [`Faq`].
pub struct FaqEntry {
    /// Header text.
    pub question: String,
    /// Body copy revealed when the entry is open.
    pub answer: String,
}

#[component]
/// Frequently-asked-questions list.
///
/// Entries open independently unless `allow_multiple` is turned off, in which
/// case opening one closes the rest and reselecting the open entry closes it.
pub fn Faq(
    items: Vec<FaqEntry>,
    #[prop(default = true)] allow_multiple: bool,
    #[prop(optional, into)] open_items: Option<Signal<Vec<usize>>>,
    #[prop(optional)] default_open: Vec<usize>,
    #[prop(optional)] on_toggle: Option<Callback<(usize, bool)>>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<usize>>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let context = accordion_context(
        id,
        allow_multiple,
        open_items,
        default_open,
        on_toggle,
        on_value_change,
    );
    if items.is_empty() {
        logging::warn!("Faq `{}` has no entries", context.base_id.get_value());
    }

    view! {
        <section
            class=merge_layout_class("ui-faq", layout_class)
            data-ui-primitive="true"
            data-ui-kind="faq"
        >
            {title.map(|title| view! { <Heading level=2>{title}</Heading> })}
            <div
                class="ui-accordion"
                id=context.base_id.get_value()
                data-ui-kind="accordion"
                data-ui-multiple=bool_token(allow_multiple)
            >
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let answer = entry.answer;
                        view! {
                            <AccordionItem index title=entry.question>
                                <p data-ui-slot="answer">{answer.clone()}</p>
                            </AccordionItem>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
