//! Donate section at the bottom of the page.

use dioxus::prelude::*;
use locfolio_core::{DonateButton, UiEvent};
use locfolio_ui::ButtonVariant;

use crate::context::use_page;

#[component]
pub fn DonateSection() -> Element {
    let mut page = use_page();
    let href = page.read().config().donate_href();
    let class = ButtonVariant::Donate.class_list(Some("btn-donate-large"));

    rsx! {
        section { id: "donate", class: "donate-section",
            h2 { class: "section-title", "Підтримати проєкт" }
            p { class: "donate-text",
                "Усі локалізації безкоштовні. Якщо вони вам допомогли, підтримайте роботу над наступними."
            }
            a {
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "{class}",
                onclick: move |_| {
                    page.write().dispatch(UiEvent::DonateClicked(DonateButton::Bottom));
                },
                "Підтримати"
            }
        }
    }
}
