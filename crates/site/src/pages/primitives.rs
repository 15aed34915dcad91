use leptos::*;
use system_ui::prelude::*;

#[component]
pub fn PrimitivesPage() -> impl IntoView {
    let pressed = create_rw_signal(false);
    let agreed = create_rw_signal(false);

    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel title="Buttons">
                <Cluster gap=LayoutGap::Sm>
                    <Button variant=ButtonVariant::Primary>"Primary"</Button>
                    <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                    <Button variant=ButtonVariant::Quiet>"Quiet"</Button>
                    <Button variant=ButtonVariant::Danger>"Danger"</Button>
                    <Button
                        pressed=pressed
                        trailing_icon=IconName::ChevronDown
                        on_click=Callback::new(move |_| pressed.update(|pressed| *pressed = !*pressed))
                    >
                        "Toggle"
                    </Button>
                    <IconButton icon=IconName::Add aria_label="Add" />
                    <IconButton icon=IconName::Subtract aria_label="Remove" />
                    <IconButton icon=IconName::Dismiss aria_label="Dismiss" />
                </Cluster>
            </Panel>

            <Panel title="Inputs">
                <Cluster gap=LayoutGap::Sm>
                    <CheckboxField
                        id="terms"
                        checked=agreed
                        on_change=Callback::new(move |_| agreed.update(|agreed| *agreed = !*agreed))
                    />
                    <label for="terms">
                        <Text role=TextRole::Label>"I agree to the terms"</Text>
                    </label>
                    <Badge tone=TextTone::Accent>{move || if agreed.get() { "agreed" } else { "pending" }}</Badge>
                </Cluster>
            </Panel>

            <Panel title="Surfaces">
                <Cluster gap=LayoutGap::Md align=LayoutAlign::Start>
                    <Surface elevation=Elevation::Raised>
                        <Text>"Raised surface"</Text>
                    </Surface>
                    <Surface variant=SurfaceVariant::Muted elevation=Elevation::Inset>
                        <Text tone=TextTone::Secondary>"Inset surface"</Text>
                    </Surface>
                    <Card title="Card" description="Title, copy, and actions.">
                        <Button size=ButtonSize::Sm>"Action"</Button>
                    </Card>
                </Cluster>
            </Panel>

            <Panel title="Menu surface">
                <MenuSurface role="menu" aria_label="Example menu">
                    <Button variant=ButtonVariant::Quiet role="menuitem">"Rename"</Button>
                    <MenuSeparator />
                    <Button variant=ButtonVariant::Quiet role="menuitem" leading_icon=IconName::Dismiss>
                        "Delete"
                    </Button>
                </MenuSurface>
            </Panel>
        </Stack>
    }
}
