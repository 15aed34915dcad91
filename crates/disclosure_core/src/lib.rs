//! Headless disclosure and selection state shared by the design-system components.
//!
//! Accordions, FAQs, dropdowns, checkbox groups, list items, and group fields all
//! answer the same three questions: which items are active, who owns that state,
//! and what toggling an item does. This crate answers them without any UI
//! dependency:
//!
//! - [`ToggleSet`] is the immutable set of active items.
//! - [`SelectionPolicy`] computes the next set for a toggle request.
//! - [`ControllerBinding`] decides whether the set is owned by the caller
//!   (controlled) or by the component instance (uncontrolled).
//! - [`CallSite`] names the policy each component uses.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod binding;
mod call_site;
mod policy;
mod toggle_set;

pub use binding::{BindingError, BindingMode, ControllerBinding, Notifier, ToggleChange};
pub use call_site::{
    CallSite, DisclosureConfig, GroupFieldKind, ListSelection, ParseGroupFieldKindError,
};
pub use policy::{ParseSelectionModeError, SelectionMode, SelectionPolicy};
pub use toggle_set::ToggleSet;
