//! Badge Components
//!
//! Small inline labels on project cards.

use dioxus::prelude::*;

/// Work-scope tag, e.g. "UI" or "Субтитри"
#[component]
pub fn ScopeBadge(label: String) -> Element {
    rsx! {
        span { class: "scope-badge", "{label}" }
    }
}

/// Marker on projects from the current calendar year
#[component]
pub fn NewBadge() -> Element {
    rsx! {
        span { class: "project-new-badge", "NEW" }
    }
}

/// One year or platform chip in the card meta row
#[component]
pub fn MetaChip(text: String) -> Element {
    rsx! {
        span { class: "project-meta-item", "{text}" }
    }
}

/// Row of scope badges; renders nothing for an empty list
#[component]
pub fn ScopeList(tags: Vec<String>) -> Element {
    if tags.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "project-scope",
            for (i, tag) in tags.into_iter().enumerate() {
                ScopeBadge { key: "{i}", label: tag }
            }
        }
    }
}
