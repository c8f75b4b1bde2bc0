//! Project Modal Component
//!
//! Detail dialog for the project last activated in the grid. The shell is
//! always in the tree so its ids are present; visibility, `aria-hidden` and
//! the page scroll lock follow the modal state of the page.

use dioxus::prelude::*;
use locfolio_core::view::{Instructions, ModalView, INSTRUCTIONS_PENDING};
use locfolio_core::{DismissTrigger, UiEvent};
use locfolio_ui::{BugReportIcon, ButtonVariant, CloseButton, DownloadIcon};

use crate::context::use_page;
use crate::effects::{apply_effect, set_scroll_locked};

#[component]
pub fn ProjectModal() -> Element {
    let mut page = use_page();

    let (visible, aria_hidden, content) = {
        let page = page.read();
        let modal = page.modal();
        (
            modal.state().visible,
            modal.state().aria_hidden,
            modal.content().cloned(),
        )
    };

    use_effect(move || {
        set_scroll_locked(page.read().modal().state().scroll_locked);
    });

    let mut dismiss = move |trigger: DismissTrigger| {
        let effect = page.write().dispatch(UiEvent::ModalDismissed(trigger));
        apply_effect(effect);
    };

    rsx! {
        div {
            id: "projectModal",
            class: if visible { "modal active" } else { "modal" },
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "modalTitle",
            "aria-hidden": if aria_hidden { "true" } else { "false" },
            onclick: move |_| dismiss(DismissTrigger::Scrim),

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: move |_| dismiss(DismissTrigger::CloseButton) }

                div { id: "modalContent",
                    if let Some(view) = content {
                        ModalBody { view }
                    }
                }
            }
        }
    }
}

#[component]
fn ModalBody(view: ModalView) -> Element {
    let mut page = use_page();

    let download_class = ButtonVariant::Primary.class_list(Some("btn-download"));
    let report_class = ButtonVariant::ReportBug.class_list(None);

    let meta = [
        ("Версія локалізації", view.version.clone()),
        ("Дата локалізації", view.release_date.clone()),
        ("Платформа", view.platform.clone()),
    ];

    rsx! {
        div { class: "modal-header",
            h2 { id: "modalTitle", class: "modal-title", "{view.title}" }
            if let Some(src) = view.image.clone() {
                img { src: "{src}", alt: "{view.title}", class: "modal-image" }
            }
        }

        div { class: "modal-body",
            div { class: "modal-meta",
                for (label, value) in meta {
                    if let Some(value) = value {
                        div { key: "{label}", class: "modal-meta-item",
                            strong { "{label}:" }
                            " {value}"
                        }
                    }
                }
            }

            div { class: "modal-section",
                h3 { class: "modal-section-title", "Як встановити локалізацію" }
                div { class: "modal-instructions",
                    {match &view.instructions {
                        Instructions::Steps(lines) => rsx! {
                            for (i, line) in lines.iter().enumerate() {
                                p { key: "{i}", "{line}" }
                            }
                        },
                        Instructions::Pending => rsx! {
                            p { "{INSTRUCTIONS_PENDING}" }
                        },
                    }}
                }
            }

            if let Some(download) = view.download.clone() {
                div { class: "modal-download",
                    a {
                        href: "{download.url}",
                        class: "{download_class}",
                        download: "",
                        "data-project-title": "{download.title}",
                        "data-project-version": "{download.version}",
                        onclick: move |_| {
                            page.write().dispatch(UiEvent::ModalDownload);
                        },
                        span { "Завантажити локалізацію" }
                        DownloadIcon {}
                    }
                }
            }

            div { class: "modal-report-bug",
                a { href: "{view.bug_report_href}", class: "{report_class}",
                    span { "Повідомити про помилку" }
                    BugReportIcon {}
                }
            }
        }
    }
}
