//! Project Status Indicator Component
//!
//! A colored dot followed by the status label:
//! - "Завершено" - completed, success color
//! - "У процесі" - in progress (or an unknown status), warning color

use dioxus::prelude::*;
use locfolio_core::ProjectStatus;

/// Properties for the StatusIndicator component
#[derive(Clone, PartialEq, Props)]
pub struct StatusIndicatorProps {
    /// The project status to display
    pub status: ProjectStatus,
}

/// Displays a project's status with a colored dot
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusIndicator { status: ProjectStatus::Completed }
/// }
/// ```
#[component]
pub fn StatusIndicator(props: StatusIndicatorProps) -> Element {
    let label = props.status.label();
    let dot_class = format!("status-indicator {}", props.status.css_class());

    rsx! {
        span { class: "project-status",
            span {
                class: "{dot_class}",
                // ARIA for screen readers
                role: "img",
                "aria-label": "{label}",
            }
            "{label}"
        }
    }
}
