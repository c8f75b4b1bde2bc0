//! Navigation Header Component
//!
//! Fixed header with the studio title, in-page anchors, the menu donate
//! link and the theme toggle.

use dioxus::prelude::*;
use locfolio_core::{DonateButton, UiEvent};

use crate::components::ThemeToggle;
use crate::context::use_page;
use crate::effects::apply_effect;

/// In-page section reachable from the header
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavSection {
    Projects,
    Donate,
    Contact,
}

impl NavSection {
    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            NavSection::Projects => "Проєкти",
            NavSection::Donate => "Підтримати",
            NavSection::Contact => "Контакти",
        }
    }

    /// Get the anchor of this section
    pub fn href(&self) -> &'static str {
        match self {
            NavSection::Projects => "#projects",
            NavSection::Donate => "#donate",
            NavSection::Contact => "#contact",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            NavSection::Donate => "nav-link nav-link-donate",
            _ => "nav-link",
        }
    }
}

/// Navigation Header component
///
/// - Left: studio title, scrolls back to the top
/// - Center: section anchors, the donate entry is instrumented
/// - Right: theme toggle
#[component]
pub fn NavHeader() -> Element {
    let mut page = use_page();

    let sections = [NavSection::Projects, NavSection::Donate, NavSection::Contact];

    let mut follow_anchor = move |e: MouseEvent, href: &str| {
        let effect = page.write().dispatch(UiEvent::AnchorClicked(href.to_string()));
        if apply_effect(effect) {
            e.prevent_default();
        }
    };

    rsx! {
        header { class: "nav-header",
            a {
                class: "nav-brand",
                href: "#hero",
                onclick: move |e| follow_anchor(e, "#hero"),
                "Sense5 Studio"
            }

            nav { class: "nav-links",
                for section in sections {
                    a {
                        key: "{section.href()}",
                        class: section.class(),
                        href: section.href(),
                        onclick: move |e| {
                            if section == NavSection::Donate {
                                page.write().dispatch(UiEvent::DonateClicked(DonateButton::Menu));
                            }
                            follow_anchor(e, section.href());
                        },
                        "{section.display_name()}"
                    }
                }
            }

            ThemeToggle {}
        }
    }
}
