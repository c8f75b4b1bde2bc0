//! Button Components
//!
//! Button styles used across the portfolio:
//! - Primary: download actions on cards and in the modal
//! - Donate: support buttons in the menu and the donate section
//! - ReportBug: the modal's bug report link styled as a button
//!
//! Links that look like buttons take their classes from
//! [`ButtonVariant::class_list`].

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main action - accent fill
    #[default]
    Primary,
    /// Donation call to action
    Donate,
    /// Outlined bug report action
    ReportBug,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Donate => "btn-donate",
            ButtonVariant::ReportBug => "btn-report-bug",
        }
    }

    /// Full class list: the shared `btn` class, the variant, then extras
    pub fn class_list(&self, extra: Option<&str>) -> String {
        match extra.filter(|e| !e.is_empty()) {
            Some(extra) => format!("btn {} {}", self.class(), extra),
            None => format!("btn {}", self.class()),
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler; receives the raw event so callers can stop propagation
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         class: "btn-card-download".to_string(),
///         onclick: move |e: MouseEvent| {
///             e.stop_propagation();
///             open_modal();
///         },
///         "Скачати"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = props.variant.class_list(props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |e| {
                if let Some(handler) = &props.onclick {
                    handler.call(e);
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, theme toggle)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional element id
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            id: props.id,
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Закрити".to_string(),
            id: "modalClose".to_string(),
            class: "modal-close".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Donate.class(), "btn-donate");
        assert_eq!(ButtonVariant::ReportBug.class(), "btn-report-bug");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn class_list_appends_extras() {
        assert_eq!(ButtonVariant::Primary.class_list(None), "btn btn-primary");
        assert_eq!(ButtonVariant::Primary.class_list(Some("")), "btn btn-primary");
        assert_eq!(
            ButtonVariant::Primary.class_list(Some("btn-card-download")),
            "btn btn-primary btn-card-download"
        );
        assert_eq!(
            ButtonVariant::Donate.class_list(Some("btn-donate-large")),
            "btn btn-donate btn-donate-large"
        );
        assert_eq!(ButtonVariant::ReportBug.class_list(None), "btn btn-report-bug");
    }
}
