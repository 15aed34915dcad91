use super::*;

#[component]
/// Generic surface primitive.
pub fn Surface(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Flat)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="surface"
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Raised section with an optional titled header.
pub fn Panel(
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    let has_header = title.is_some() || description.is_some();
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            id=id
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
        >
            {has_header.then(|| view! {
                <header data-ui-slot="header">
                    {title.map(|title| view! { <h2 data-ui-slot="title">{title}</h2> })}
                    {description.map(|description| view! { <p data-ui-slot="description">{description}</p> })}
                </header>
            })}
            <div data-ui-slot="body">{children()}</div>
        </section>
    }
}

#[component]
/// Card tile with title, supporting copy, and an optional action row.
pub fn Card(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-elevation=elevation.token()
        >
            <h3 data-ui-slot="title">{title}</h3>
            {description.map(|description| view! { <p data-ui-slot="description">{description}</p> })}
            {children.map(|children| view! { <div data-ui-slot="actions">{children()}</div> })}
        </article>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Page or section heading rendered as a real `h1`-`h3` element.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let tone = tone.token();
    match level {
        0 | 1 => view! { <h1 class=class data-ui-kind="heading" data-ui-tone=tone>{children()}</h1> }.into_view(),
        2 => view! { <h2 class=class data-ui-kind="heading" data-ui-tone=tone>{children()}</h2> }.into_view(),
        _ => view! { <h3 class=class data-ui-kind="heading" data-ui-tone=tone>{children()}</h3> }.into_view(),
    }
}

#[component]
/// Compact status badge.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Placeholder block for empty lists and unknown routes.
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            <Icon icon=IconName::Info size=IconSize::Lg />
            <p data-ui-slot="title">{title}</p>
            {description.map(|description| view! { <p data-ui-slot="description">{description}</p> })}
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Header row with title, supporting meta copy, and trailing actions.
pub fn PaneHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] title: String,
    #[prop(optional, into)] meta: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-pane-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane-header"
        >
            <div data-ui-slot="copy">
                <div data-ui-slot="title">{title}</div>
                {meta.map(|meta| view! { <div data-ui-slot="meta">{meta}</div> })}
            </div>
            {children.map(|children| view! { <div data-ui-slot="actions">{children()}</div> })}
        </header>
    }
}
