use leptos::*;
use system_ui::prelude::*;

use super::{apply_report, describe_active, Demo};
use crate::content::faq_content;

#[component]
pub fn AccordionPage() -> impl IntoView {
    let single_open = create_rw_signal(vec![1usize]);
    let multi_open = create_rw_signal(Vec::<usize>::new());

    view! {
        <Stack gap=LayoutGap::Lg>
            <Demo
                title="Uncontrolled, single open"
                caption="Starts with the first section open. Opening another closes it; reopening the open section collapses it."
                status="State lives inside the accordion."
            >
                <Accordion default_open=vec![0] aria_label="Shipping details">
                    <AccordionItem index=0 title="Delivery windows">
                        <Text>"Orders placed before noon ship the same day."</Text>
                    </AccordionItem>
                    <AccordionItem index=1 title="Returns" description="Within 30 days">
                        <Text>"Return labels are emailed on request."</Text>
                    </AccordionItem>
                    <AccordionItem index=2 title="International" disabled=true>
                        <Text>"Not available yet."</Text>
                    </AccordionItem>
                </Accordion>
            </Demo>

            <Demo
                title="Controlled, single open"
                caption="The page owns the open list and applies every report."
                status=Signal::derive(move || format!("open: {}", single_open.with(|open| describe_active(open))))
            >
                <Cluster gap=LayoutGap::Sm>
                    <Button on_click=Callback::new(move |_| single_open.set(Vec::new()))>
                        "Collapse all"
                    </Button>
                    <Button on_click=Callback::new(move |_| single_open.set(vec![2]))>
                        "Open billing"
                    </Button>
                </Cluster>
                <Accordion
                    open=single_open
                    default_open=vec![0]
                    on_value_change=Callback::new(move |open: Vec<usize>| single_open.set(open))
                >
                    <AccordionItem index=0 title="Profile">
                        <Text>"Name, avatar, and contact details."</Text>
                    </AccordionItem>
                    <AccordionItem index=1 title="Security">
                        <Text>"Password and two-factor settings."</Text>
                    </AccordionItem>
                    <AccordionItem index=2 title="Billing">
                        <Text>"Invoices and payment methods."</Text>
                    </AccordionItem>
                </Accordion>
            </Demo>

            <Demo
                title="Controlled, multiple open"
                caption="`allow_multiple` toggles each section on its own."
                status=Signal::derive(move || format!("open: {}", multi_open.with(|open| describe_active(open))))
            >
                <Accordion
                    allow_multiple=true
                    open=multi_open
                    on_open_change=Callback::new(move |(index, is_open): (usize, bool)| {
                        multi_open.update(|open| apply_report(open, index, is_open));
                    })
                >
                    <AccordionItem index=0 title="Storage">
                        <Text>"12.4 GB of 50 GB used."</Text>
                    </AccordionItem>
                    <AccordionItem index=1 title="Devices">
                        <Text>"Three devices signed in."</Text>
                    </AccordionItem>
                    <AccordionItem index=2 title="Sessions">
                        <Text>"Last activity two minutes ago."</Text>
                    </AccordionItem>
                </Accordion>
            </Demo>
        </Stack>
    }
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let content = faq_content();
    let open_items = create_rw_signal(Vec::<usize>::new());
    let single_items = content.entries.clone();

    view! {
        <Stack gap=LayoutGap::Lg>
            <Demo
                title="Uncontrolled FAQ"
                caption="Settings come from the bundled JSON fixture."
                status="State lives inside the FAQ."
            >
                <Faq
                    items=content.entries.clone()
                    allow_multiple=content.allow_multiple()
                    default_open=content.default_open()
                    title="Frequently asked questions"
                />
            </Demo>

            <Demo
                title="Controlled, single open"
                caption="Opening one answer closes the rest. Reopening the open answer closes it."
                status=Signal::derive(move || format!("open: {}", open_items.with(|open| describe_active(open))))
            >
                <Faq
                    items=single_items
                    allow_multiple=false
                    open_items=open_items
                    on_value_change=Callback::new(move |open: Vec<usize>| open_items.set(open))
                />
            </Demo>
        </Stack>
    }
}
