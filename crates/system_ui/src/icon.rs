//! Centralized icon catalog for the design-system primitives.
//!
//! Components reference icons through [`IconName`] so no control embeds raw SVG
//! markup. Paths are Fluent UI System Icons (regular, 24px).

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by the primitives.
pub enum IconName {
    /// Expand chevron for closed disclosures.
    ChevronDown,
    /// Collapse chevron for open disclosures.
    ChevronUp,
    /// Checked state marker.
    Checkmark,
    /// Indeterminate state marker.
    Subtract,
    /// Add/expand affordance.
    Add,
    /// Dismiss/close icon.
    Dismiss,
    /// Informational glyph for empty and status blocks.
    Info,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::ChevronUp => "chevron-up",
            Self::Checkmark => "checkmark",
            Self::Subtract => "subtract",
            Self::Add => "add",
            Self::Dismiss => "dismiss",
            Self::Info => "info",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::ChevronDown => {
                r#"<path d="M4.22 8.47c.3-.3.77-.3 1.06 0L12 15.19l6.72-6.72a.75.75 0 1 1 1.06 1.06l-7.25 7.25c-.3.3-.77.3-1.06 0L4.22 9.53a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::ChevronUp => {
                r#"<path d="M4.22 15.53c.3.3.77.3 1.06 0L12 8.81l6.72 6.72a.75.75 0 1 0 1.06-1.06l-7.25-7.25a.75.75 0 0 0-1.06 0l-7.25 7.25c-.3.3-.3.77 0 1.06Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::Subtract => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::Add => {
                r#"<path d="M11.75 3a.75.75 0 0 1 .74.65l.01.1v7.5h7.5a.75.75 0 0 1 .1 1.5h-7.6v7.5a.75.75 0 0 1-1.5.1v-7.6H3.75a.75.75 0 0 1-.1-1.5h7.6v-7.5c0-.41.34-.75.75-.75Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Info => {
                r#"<path d="M12 1.5a10.5 10.5 0 1 1 0 21 10.5 10.5 0 0 1 0-21ZM12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18Zm0 7.5c.41 0 .75.34.75.75v5.5a.75.75 0 0 1-1.5 0v-5.5c0-.41.34-.75.75-.75Zm0-3.25a1 1 0 1 1 0 2 1 1 0 0 1 0-2Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls).
    Xs,
    /// 16px standard icon (buttons and menus).
    #[default]
    Sm,
    /// 20px medium icon (icon buttons).
    Md,
    /// 24px large icon (empty states).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon SVG from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
