use super::*;

#[component]
/// Floating surface for dropdown panels and popups.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_labelledby: Option<String>,
    #[prop(optional, into)] aria_multiselectable: Option<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role=role
            aria-label=aria_label
            aria-labelledby=aria_labelledby
            aria-multiselectable=aria_multiselectable.map(bool_token)
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-elevation=Elevation::Overlay.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Divider between groups of menu items.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}
