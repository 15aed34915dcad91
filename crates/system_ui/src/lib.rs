//! Leptos component library for the design system's disclosure and selection
//! widgets.
//!
//! The crate owns reusable primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the site CSS. Stateful widgets
//! (accordions, FAQs, dropdowns, checkbox groups, list items, and group fields)
//! keep their active items in a [`disclosure_core::ControllerBinding`] wrapped
//! by [`ToggleController`], so each one works controlled or uncontrolled with
//! the same props shape.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod disclosure;
mod icon;
mod primitives;

pub use disclosure::{
    Accordion, AccordionItem, CheckboxGroup, Dropdown, DropdownItem, Faq, FaqEntry, FieldOption,
    GroupField, ListGroup, ListItem, ToggleController,
};
pub use disclosure_core::{GroupFieldKind, ListSelection, ToggleChange, ToggleSet};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CheckboxField, Cluster, Elevation, EmptyState,
    Heading, IconButton, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, MenuSeparator,
    MenuSurface, PaneHeader, Panel, RadioField, Stack, Surface, SurfaceVariant, Text, TextRole,
    TextTone,
};

/// Convenience imports for crates composing the component set.
pub mod prelude {
    pub use crate::{
        Accordion, AccordionItem, Badge, Button, ButtonSize, ButtonVariant, Card, CheckboxField,
        CheckboxGroup, Cluster, Dropdown, DropdownItem, Elevation, EmptyState, Faq, FaqEntry,
        FieldOption, GroupField, GroupFieldKind, Heading, Icon, IconButton, IconName, IconSize,
        LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, ListGroup, ListItem, ListSelection,
        MenuSeparator, MenuSurface, PaneHeader, Panel, RadioField, Stack, Surface, SurfaceVariant,
        Text, TextRole, TextTone, ToggleChange, ToggleController, ToggleSet,
    };
}
