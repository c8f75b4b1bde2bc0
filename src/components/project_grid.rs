//! Project grid: skeletons while loading, then the cards or a message.

use dioxus::prelude::*;
use locfolio_core::view::EMPTY_STATE;
use locfolio_core::GridState;
use locfolio_ui::SkeletonGrid;

use crate::components::{ProjectCard, SoonCard};
use crate::context::use_page;

#[component]
pub fn ProjectGrid() -> Element {
    let page = use_page();
    let page = page.read();

    let body = match page.grid() {
        GridState::Loading { skeletons } => rsx! {
            SkeletonGrid { count: *skeletons }
        },
        GridState::Rendered(grid) => match grid.soon() {
            Some(soon) => rsx! {
                for card in grid.cards().iter().cloned() {
                    ProjectCard { key: "{card.index}", card }
                }
                SoonCard { soon: soon.clone() }
            },
            None => rsx! {
                p { class: "empty-state", "{EMPTY_STATE}" }
            },
        },
        GridState::Error(message) => rsx! {
            p { class: "empty-state", "{message}" }
        },
    };

    rsx! {
        div { id: "projectsGrid", class: "projects-grid", role: "list", {body} }
    }
}
