use leptos::*;
use system_ui::prelude::*;

use super::{apply_report, describe_active, Demo};
use crate::content::option_sets;

#[component]
pub fn DropdownPage() -> impl IntoView {
    let sizes = option_sets().sizes;
    let size = create_rw_signal(vec!["m".to_string()]);
    let panel_open = create_rw_signal(false);
    let filters = create_rw_signal(Vec::<String>::new());

    let size_items = move || {
        sizes
            .iter()
            .cloned()
            .map(|option| {
                view! {
                    <DropdownItem value=option.value.clone() disabled=option.disabled>
                        {option.label.clone()}
                    </DropdownItem>
                }
            })
            .collect_view()
    };

    view! {
        <Stack gap=LayoutGap::Lg>
            <Demo
                title="Uncontrolled single select"
                caption="Choosing the selected size again keeps it selected. The panel closes after each choice."
                status="State lives inside the dropdown."
            >
                <Dropdown label="Size" default_checked=vec!["s".to_string()]>
                    <DropdownItem value="s">"Small"</DropdownItem>
                    <DropdownItem value="m">"Medium"</DropdownItem>
                    <DropdownItem value="l">"Large"</DropdownItem>
                </Dropdown>
            </Demo>

            <Demo
                title="Controlled single select with controlled panel"
                caption="Both the value and the open panel belong to the page."
                status=Signal::derive(move || {
                    format!(
                        "value: {} / panel: {}",
                        size.with(|size| describe_active(size)),
                        if panel_open.get() { "open" } else { "closed" },
                    )
                })
            >
                <Dropdown
                    label="Size"
                    placeholder="Pick a size"
                    checked_values=size
                    on_value_change=Callback::new(move |next: Vec<String>| size.set(next))
                    open=panel_open
                    on_open_change=Callback::new(move |open: bool| panel_open.set(open))
                >
                    {size_items.clone()}
                </Dropdown>
            </Demo>

            <Demo
                title="Controlled multiselect"
                caption="Items toggle independently and the panel stays open."
                status=Signal::derive(move || format!("filters: {}", filters.with(|filters| describe_active(filters))))
            >
                <Dropdown
                    label="Filters"
                    multiselect=true
                    checked_values=filters
                    on_checked_change=Callback::new(move |(value, checked): (String, bool)| {
                        filters.update(|filters| apply_report(filters, value, checked));
                    })
                >
                    <DropdownItem value="unread">"Unread"</DropdownItem>
                    <DropdownItem value="flagged">"Flagged"</DropdownItem>
                    <DropdownItem value="attachments">"Has attachments"</DropdownItem>
                </Dropdown>
            </Demo>
        </Stack>
    }
}

#[component]
pub fn CheckboxGroupPage() -> impl IntoView {
    let options = option_sets();
    let toppings = create_rw_signal(Vec::<String>::new());

    view! {
        <Stack gap=LayoutGap::Lg>
            <Demo
                title="Uncontrolled"
                caption="Starts with email checked. Disabled options never change."
                status="State lives inside the group."
            >
                <CheckboxGroup
                    label="Notifications"
                    options=options.notifications.clone()
                    default_checked=vec!["email".to_string()]
                />
            </Demo>

            <Demo
                title="Controlled with select all"
                caption="Select all reads as mixed while only some toppings are checked."
                status=Signal::derive(move || format!("checked: {}", toppings.with(|toppings| describe_active(toppings))))
            >
                <CheckboxGroup
                    label="Toppings"
                    name="toppings"
                    options=options.toppings.clone()
                    select_all_label="All toppings"
                    checked_values=toppings
                    on_checked_change=Callback::new(move |(value, checked): (String, bool)| {
                        toppings.update(|toppings| apply_report(toppings, value, checked));
                    })
                />
            </Demo>
        </Stack>
    }
}

#[component]
pub fn ListItemPage() -> impl IntoView {
    let folder = create_rw_signal(vec!["inbox".to_string()]);

    view! {
        <Stack gap=LayoutGap::Lg>
            <Demo
                title="Plain list"
                caption="Rows without selection state."
                status="No selection."
            >
                <ListGroup aria_label="Recent files">
                    <ListItem value="report">"Quarterly report.pdf"</ListItem>
                    <ListItem value="notes" description="Edited yesterday">"Meeting notes.md"</ListItem>
                </ListGroup>
            </Demo>

            <Demo
                title="Controlled radio list"
                caption="Exactly one folder stays selected."
                status=Signal::derive(move || format!("folder: {}", folder.with(|folder| describe_active(folder))))
            >
                <ListGroup
                    selection=ListSelection::Radio
                    aria_label="Folders"
                    value=folder
                    on_value_change=Callback::new(move |next: Vec<String>| folder.set(next))
                >
                    <ListItem value="inbox">"Inbox"</ListItem>
                    <ListItem value="archive">"Archive"</ListItem>
                    <ListItem value="spam" disabled=true>"Spam"</ListItem>
                </ListGroup>
            </Demo>

            <Demo
                title="Uncontrolled checkbox list"
                caption="Rows toggle independently."
                status="State lives inside the list."
            >
                <ListGroup selection=ListSelection::Checkbox default_value=vec!["wifi".to_string()] aria_label="Radios">
                    <ListItem value="wifi">"Wi-Fi"</ListItem>
                    <ListItem value="bluetooth">"Bluetooth"</ListItem>
                    <ListItem value="nfc">"NFC"</ListItem>
                </ListGroup>
            </Demo>
        </Stack>
    }
}

#[component]
pub fn GroupFieldPage() -> impl IntoView {
    let options = option_sets();
    let contact = create_rw_signal(Vec::<String>::new());
    let kind_token = create_rw_signal("radio".to_string());
    let kind = Signal::derive(move || {
        kind_token.with(|token| match token.parse::<GroupFieldKind>() {
            Ok(kind) => kind,
            Err(err) => {
                logging::warn!("{err}");
                GroupFieldKind::Radio
            }
        })
    });
    let notifications = options.notifications.clone();

    view! {
        <Stack gap=LayoutGap::Lg>
            <Demo
                title="Controlled radio field"
                caption="Reselecting the chosen option keeps it."
                status=Signal::derive(move || format!("contact: {}", contact.with(|contact| describe_active(contact))))
            >
                <GroupField
                    kind=GroupFieldKind::Radio
                    legend="Preferred contact"
                    name="contact"
                    options=options.notifications.clone()
                    value=contact
                    on_value_change=Callback::new(move |next: Vec<String>| contact.set(next))
                />
            </Demo>

            <Demo
                title="Uncontrolled, switchable type"
                caption="The `type` token picks radio or checkbox behaviour. Switching remounts the field with fresh state."
                status=Signal::derive(move || format!("type: {}", kind.get().token()))
            >
                <Cluster gap=LayoutGap::Sm>
                    <Button
                        selected=Signal::derive(move || kind.get() == GroupFieldKind::Radio)
                        on_click=Callback::new(move |_| kind_token.set("radio".to_string()))
                    >
                        "radio"
                    </Button>
                    <Button
                        selected=Signal::derive(move || kind.get() == GroupFieldKind::Checkbox)
                        on_click=Callback::new(move |_| kind_token.set("Checkbox".to_string()))
                    >
                        "checkbox"
                    </Button>
                </Cluster>
                {move || {
                    view! {
                        <GroupField
                            kind=kind.get()
                            legend="Alerts"
                            description="Disabled options keep their state."
                            options=notifications.clone()
                            default_value=vec!["push".to_string()]
                        />
                    }
                }}
            </Demo>
        </Stack>
    }
}
