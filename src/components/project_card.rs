//! Project Card Component
//!
//! One grid card built from a [`CardView`]. Activating the card (click,
//! Enter or Space) opens the project modal. Store/repo/devlog links and the
//! download button are nested controls: they keep their own behavior and
//! never reach the card handler.

use dioxus::prelude::*;
use locfolio_core::view::{CardView, SoonCardView};
use locfolio_core::{ClickTarget, UiEvent};
use locfolio_ui::{
    Button, ButtonVariant, DownloadIcon, MetaChip, NewBadge, ProgressBar, ScopeList,
    StatusIndicator,
};

use crate::context::use_page;
use crate::effects::apply_effect;

/// Whether a key activates a focused card
fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[component]
pub fn ProjectCard(card: CardView) -> Element {
    let mut page = use_page();
    let index = card.index;
    let width = page.read().bar_width(index);

    let mut activate = move |target: ClickTarget| {
        let effect = page.write().dispatch(UiEvent::CardActivated { index, target });
        apply_effect(effect)
    };

    let class = if card.featured {
        "project-card featured"
    } else {
        "project-card"
    };

    rsx! {
        article {
            class: "{class}",
            role: "listitem",
            tabindex: "0",
            "data-project-index": "{index}",
            onclick: move |_| {
                activate(ClickTarget::Card);
            },
            onkeydown: move |e: KeyboardEvent| {
                if is_activation_key(&e.key()) {
                    e.prevent_default();
                    activate(ClickTarget::Card);
                }
            },

            if card.is_new {
                NewBadge {}
            }

            if let Some(src) = card.image.clone() {
                div { class: "project-image-container",
                    img {
                        src: "{src}",
                        alt: "{card.title}",
                        class: "project-image",
                        "loading": "lazy",
                    }
                }
            }

            div { class: "project-content",
                div { class: "project-header",
                    h3 { class: "project-title", "{card.title}" }
                }

                div { class: "project-meta",
                    for (i, item) in card.meta.iter().cloned().enumerate() {
                        MetaChip { key: "{i}", text: item }
                    }
                    StatusIndicator { status: card.status }
                }

                ProgressBar {
                    target: card.progress,
                    width,
                    on_visible: move |visible: bool| {
                        if let Some(reveal) = page.write().on_bar_visibility(index, visible) {
                            tracing::debug!(index = reveal.index, target = reveal.target, "progress revealed");
                        }
                    },
                }

                ScopeList { tags: card.scope.clone() }

                if let Some(summary) = card.summary.clone() {
                    p { class: "project-summary", "{summary}" }
                }

                if card.has_download {
                    div { class: "project-card-download",
                        Button {
                            variant: ButtonVariant::Primary,
                            class: "btn-card-download".to_string(),
                            onclick: move |e: MouseEvent| {
                                e.stop_propagation();
                                let effect = page.write().dispatch(UiEvent::DownloadActivated { index });
                                apply_effect(effect);
                            },
                            span { "Скачати" }
                            DownloadIcon {}
                        }
                    }
                }

                if !card.links.is_empty() {
                    div { class: "project-links",
                        for link in card.links.iter().cloned() {
                            a {
                                key: "{link.url}",
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "project-link",
                                onclick: move |e: MouseEvent| {
                                    e.stop_propagation();
                                    activate(ClickTarget::NestedLink);
                                },
                                onkeydown: move |e: KeyboardEvent| e.stop_propagation(),
                                "{link.kind.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Trailing card inviting localization suggestions
#[component]
pub fn SoonCard(soon: SoonCardView) -> Element {
    let href = soon.mailto();
    let (title, summary, label) = (
        SoonCardView::TITLE,
        SoonCardView::SUMMARY,
        SoonCardView::LINK_LABEL,
    );

    rsx! {
        article { class: "project-card project-card-soon", role: "listitem",
            div { class: "project-content",
                div { class: "project-header",
                    h3 { class: "project-title", "{title}" }
                }
                p { class: "project-summary", "{summary}" }
                div { class: "project-links",
                    a { href: "{href}", class: "project-link project-link-suggest",
                        "{label}"
                    }
                }
            }
        }
    }
}
