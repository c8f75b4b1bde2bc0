//! Loading placeholders shown while the project data loads.

use dioxus::prelude::*;

/// Placeholder shaped like a project card
#[component]
pub fn SkeletonCard() -> Element {
    rsx! {
        div { class: "skeleton-card", "aria-hidden": "true",
            div { class: "skeleton-image" }
            div { class: "skeleton-title" }
            div { class: "skeleton-meta" }
            div { class: "skeleton-progress" }
            div {
                span { class: "skeleton-badge" }
                span { class: "skeleton-badge" }
            }
        }
    }
}

/// `count` skeleton cards in a row
#[component]
pub fn SkeletonGrid(count: usize) -> Element {
    rsx! {
        for i in 0..count {
            SkeletonCard { key: "{i}" }
        }
    }
}
