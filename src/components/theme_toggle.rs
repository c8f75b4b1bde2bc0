//! Theme toggle button showing the current theme's glyph.

use dioxus::prelude::*;
use locfolio_core::{Effect, UiEvent};
use locfolio_ui::IconButton;

use crate::context::use_page;

#[component]
pub fn ThemeToggle() -> Element {
    let mut page = use_page();
    let icon = page.read().theme().icon();

    rsx! {
        IconButton {
            id: "themeToggle".to_string(),
            class: "theme-toggle".to_string(),
            aria_label: "Перемкнути тему".to_string(),
            onclick: move |_| {
                if let Effect::ThemeApplied(theme) = page.write().dispatch(UiEvent::ThemeToggled) {
                    tracing::info!(theme = theme.as_str(), "theme toggled");
                }
            },
            span { id: "themeIcon", "{icon}" }
        }
    }
}
