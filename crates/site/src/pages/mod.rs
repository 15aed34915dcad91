//! One documentation page per component family.

use leptos::*;
use system_ui::prelude::*;

mod disclosure;
mod primitives;
mod selection;

pub use disclosure::{AccordionPage, FaqPage};
pub use primitives::PrimitivesPage;
pub use selection::{CheckboxGroupPage, DropdownPage, GroupFieldPage, ListItemPage};

/// Human-readable rendering of an active set for demo status lines.
pub(crate) fn describe_active<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Applies a `(item, active)` report to a page-owned list.
pub(crate) fn apply_report<T: PartialEq + Clone>(items: &mut Vec<T>, item: T, active: bool) {
    let present = items.contains(&item);
    match (active, present) {
        (true, false) => items.push(item),
        (false, true) => items.retain(|existing| existing != &item),
        _ => {}
    }
}

#[component]
/// Demo block with a caption and a live status line.
pub(crate) fn Demo(
    #[prop(into)] title: String,
    #[prop(into)] caption: String,
    #[prop(into)] status: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <Panel title=title description=caption>
            <Stack gap=LayoutGap::Md>
                {children()}
                <Text role=TextRole::Code tone=TextTone::Secondary ui_slot="status">
                    {move || status.get()}
                </Text>
            </Stack>
        </Panel>
    }
}
