//! Applying page effects to the webview.
//!
//! Most effects are already visible through the page signal (modal content,
//! theme, bar widths). The ones left here need the document itself.

use dioxus::prelude::*;
use locfolio_core::Effect;

/// Perform the webview side of an effect.
///
/// Returns `true` when the platform's default action should be suppressed.
pub fn apply_effect(effect: Effect) -> bool {
    match effect {
        Effect::ScrollTo(request) => {
            tracing::debug!(target = request.target.id(), "smooth scroll");
            let _ = document::eval(&request.script());
            true
        }
        Effect::ModalOpened | Effect::ModalClosed | Effect::ThemeApplied(_) => true,
        Effect::PassThrough | Effect::None => false,
    }
}

/// Lock or release page scrolling behind the modal
pub fn set_scroll_locked(locked: bool) {
    let overflow = if locked { "hidden" } else { "" };
    let _ = document::eval(&format!("document.body.style.overflow = '{overflow}';"));
}
