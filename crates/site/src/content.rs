//! Demo content bundled with the site as JSON fixtures.

use disclosure_core::{CallSite, DisclosureConfig, SelectionMode};
use leptos::logging;
use serde::Deserialize;
use system_ui::{FaqEntry, FieldOption};

const FAQ_JSON: &str = include_str!("../content/faq.json");
const OPTIONS_JSON: &str = include_str!("../content/options.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// FAQ fixture: initial disclosure settings plus the entries.
pub struct FaqContent {
    pub disclosure: DisclosureConfig<usize>,
    pub entries: Vec<FaqEntry>,
}

impl FaqContent {
    pub fn allow_multiple(&self) -> bool {
        self.disclosure.mode != SelectionMode::ExclusiveSingle
    }

    pub fn default_open(&self) -> Vec<usize> {
        self.disclosure.default_active.clone().into_vec()
    }
}

impl Default for FaqContent {
    fn default() -> Self {
        Self {
            disclosure: CallSite::Accordion {
                allow_multiple: true,
            }
            .config(Vec::new()),
            entries: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// Option lists shared by the selection demos.
pub struct OptionSets {
    pub notifications: Vec<FieldOption>,
    pub toppings: Vec<FieldOption>,
    pub sizes: Vec<FieldOption>,
}

fn parse_fixture<T: Default + for<'de> Deserialize<'de>>(name: &str, raw: &str) -> T {
    match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            logging::warn!("site content `{name}` failed to parse: {err}");
            T::default()
        }
    }
}

pub fn faq_content() -> FaqContent {
    parse_fixture("faq.json", FAQ_JSON)
}

pub fn option_sets() -> OptionSets {
    parse_fixture("options.json", OPTIONS_JSON)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Catalog entry for one documented component page.
pub struct ComponentDoc {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const COMPONENTS: &[ComponentDoc] = &[
    ComponentDoc {
        slug: "accordion",
        title: "Accordion",
        summary: "Collapsible sections. Single-open by default, reselect closes.",
    },
    ComponentDoc {
        slug: "faq",
        title: "FAQ",
        summary: "Question list built on the accordion, independent by default.",
    },
    ComponentDoc {
        slug: "dropdown",
        title: "Dropdown",
        summary: "Menu of choices. Single-select keeps one value; multiselect toggles each.",
    },
    ComponentDoc {
        slug: "checkbox-group",
        title: "Checkbox group",
        summary: "Independent checkboxes with an optional select-all row.",
    },
    ComponentDoc {
        slug: "list-item",
        title: "List item",
        summary: "List rows with radio, checkbox, or no selection.",
    },
    ComponentDoc {
        slug: "group-field",
        title: "Group field",
        summary: "Radio or checkbox fieldset driven by a `type` token.",
    },
    ComponentDoc {
        slug: "primitives",
        title: "Primitives",
        summary: "Buttons, surfaces, and text the widgets are built from.",
    },
];

pub fn component_doc(slug: &str) -> Option<&'static ComponentDoc> {
    COMPONENTS.iter().find(|doc| doc.slug == slug)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_faq_parses_with_first_entry_open() {
        let faq: FaqContent = serde_json::from_str(FAQ_JSON).expect("faq fixture");
        assert_eq!(faq.entries.len(), 6);
        assert!(faq.allow_multiple());
        assert_eq!(faq.default_open(), vec![0]);
    }

    #[test]
    fn bundled_options_parse() {
        let options: OptionSets = serde_json::from_str(OPTIONS_JSON).expect("options fixture");
        let values: Vec<_> = options.toppings.iter().map(|option| option.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b", "c", "d"]);
        assert!(options.notifications.iter().any(|option| option.disabled));
    }

    #[test]
    fn default_faq_opens_entries_independently() {
        let faq = FaqContent::default();
        assert!(faq.allow_multiple());
        assert!(faq.default_open().is_empty());
        assert_eq!(faq.disclosure.mode, SelectionMode::Independent);
    }

    #[test]
    fn malformed_fixture_falls_back_to_default() {
        let parsed: OptionSets = parse_fixture("broken.json", "{ not json");
        assert_eq!(parsed, OptionSets::default());
    }

    #[test]
    fn catalog_lookup_by_slug() {
        assert_eq!(component_doc("faq").map(|doc| doc.title), Some("FAQ"));
        assert!(component_doc("carousel").is_none());
        assert_eq!(COMPONENTS.len(), 7);
    }
}
