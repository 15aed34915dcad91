use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::prelude::*;

use crate::content::{component_doc, COMPONENTS};
use crate::pages::{
    AccordionPage, CheckboxGroupPage, DropdownPage, FaqPage, GroupFieldPage, ListItemPage,
    PrimitivesPage,
};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Disclosure components" />
        <Meta
            name="description"
            content="Accordions, dropdowns, checkbox groups, and list selection built on one controlled/uncontrolled state model."
        />

        <Router>
            <div class="site-root">
                <SiteNav />
                <main class="site-main">
                    <Routes>
                        <Route path="" view=Overview />
                        <Route path="/components/:slug" view=ComponentRoute />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav" aria-label="Components">
            <A href="/">"Overview"</A>
            {COMPONENTS
                .iter()
                .map(|doc| view! { <A href=format!("/components/{}", doc.slug)>{doc.title}</A> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn Overview() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg>
            <PaneHeader
                title="Disclosure components"
                meta="Every widget here can be controlled by the page or left to manage itself."
            >
                <Badge>{format!("{} pages", COMPONENTS.len())}</Badge>
            </PaneHeader>
            <Cluster gap=LayoutGap::Md align=LayoutAlign::Start>
                {COMPONENTS
                    .iter()
                    .map(|doc| {
                        view! {
                            <Card title=doc.title description=doc.summary>
                                <A href=format!("/components/{}", doc.slug)>"Open"</A>
                            </Card>
                        }
                    })
                    .collect_view()}
            </Cluster>
        </Stack>
    }
}

#[component]
fn ComponentRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_else(|| "unknown".to_string())
    };

    move || {
        let slug = slug();
        let Some(doc) = component_doc(&slug) else {
            logging::warn!("no component page for `{slug}`");
            return view! { <NotFound /> }.into_view();
        };

        let page = match doc.slug {
            "accordion" => view! { <AccordionPage /> }.into_view(),
            "faq" => view! { <FaqPage /> }.into_view(),
            "dropdown" => view! { <DropdownPage /> }.into_view(),
            "checkbox-group" => view! { <CheckboxGroupPage /> }.into_view(),
            "list-item" => view! { <ListItemPage /> }.into_view(),
            "group-field" => view! { <GroupFieldPage /> }.into_view(),
            "primitives" => view! { <PrimitivesPage /> }.into_view(),
            _ => view! { <NotFound /> }.into_view(),
        };

        view! {
            <article class="component-page" data-component=doc.slug>
                <PaneHeader title=doc.title meta=doc.summary />
                {page}
            </article>
        }
        .into_view()
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <EmptyState
            title="Page not found"
            description="That component is not documented here."
        >
            <A href="/">"Back to overview"</A>
        </EmptyState>
    }
}
