//! Progress Bar Component
//!
//! The label always shows the target percentage. The fill starts at 0% and
//! is widened by the page once the bar has been revealed; the width change
//! is animated by the stylesheet's transition on `.progress-fill`.

use dioxus::prelude::*;

/// Inline style for a fill of the given width
pub fn fill_style(width: u8) -> String {
    format!("width: {}%", width.min(100))
}

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Target completion shown in the label
    pub target: u8,
    /// Current fill width
    pub width: u8,
    /// Called whenever the bar enters or leaves the viewport
    #[props(default)]
    pub on_visible: Option<EventHandler<bool>>,
}

/// Labelled progress bar that reports its own visibility
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProgressBar {
///         target: card.progress,
///         width: page.read().bar_width(card.index),
///         on_visible: move |visible| reveal(index, visible),
///     }
/// }
/// ```
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let style = fill_style(props.width);
    let target = props.target;

    rsx! {
        div {
            class: "progress-container",
            onvisible: move |evt| {
                if let Some(handler) = &props.on_visible {
                    handler.call(evt.data().is_intersecting().unwrap_or(false));
                }
            },
            div { class: "progress-label",
                span { "Прогрес" }
                span { "{target}%" }
            }
            div {
                class: "progress-bar",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{target}",
                div {
                    class: "progress-fill",
                    "data-progress": "{target}",
                    style: "{style}",
                }
            }
        }
    }
}
