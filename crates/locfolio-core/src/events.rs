//! UI events and the table mapping them to handlers.
//!
//! The desktop UI turns DOM events into [`UiEvent`]s and hands them to
//! [`crate::page::Page::dispatch`], which looks the handler up in
//! [`HANDLERS`].

use crate::analytics::DonateButton;

/// Where inside a card a click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The card itself or plain content inside it
    Card,
    /// A nested link, e.g. the store page
    NestedLink,
    /// A nested button
    NestedButton,
}

impl ClickTarget {
    pub fn is_nested_control(&self) -> bool {
        !matches!(self, ClickTarget::Card)
    }
}

/// What dismissed the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    /// Click on the scrim around the content panel
    Scrim,
    EscapeKey,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Click or keyboard activation of a card
    CardActivated { index: usize, target: ClickTarget },
    /// The download button of a card
    DownloadActivated { index: usize },
    ModalDismissed(DismissTrigger),
    /// The download link inside the open modal
    ModalDownload,
    ThemeToggled,
    AnchorClicked(String),
    DonateClicked(DonateButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UiEventKind {
    CardActivated,
    DownloadActivated,
    ModalDismissed,
    ModalDownload,
    ThemeToggled,
    AnchorClicked,
    DonateClicked,
}

impl UiEvent {
    pub fn kind(&self) -> UiEventKind {
        match self {
            UiEvent::CardActivated { .. } => UiEventKind::CardActivated,
            UiEvent::DownloadActivated { .. } => UiEventKind::DownloadActivated,
            UiEvent::ModalDismissed(_) => UiEventKind::ModalDismissed,
            UiEvent::ModalDownload => UiEventKind::ModalDownload,
            UiEvent::ThemeToggled => UiEventKind::ThemeToggled,
            UiEvent::AnchorClicked(_) => UiEventKind::AnchorClicked,
            UiEvent::DonateClicked(_) => UiEventKind::DonateClicked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    OpenModal,
    CloseModal,
    TrackDownload,
    ToggleTheme,
    SmoothScroll,
    TrackDonation,
}

/// Event to handler wiring
pub const HANDLERS: &[(UiEventKind, Handler)] = &[
    (UiEventKind::CardActivated, Handler::OpenModal),
    (UiEventKind::DownloadActivated, Handler::OpenModal),
    (UiEventKind::ModalDismissed, Handler::CloseModal),
    (UiEventKind::ModalDownload, Handler::TrackDownload),
    (UiEventKind::ThemeToggled, Handler::ToggleTheme),
    (UiEventKind::AnchorClicked, Handler::SmoothScroll),
    (UiEventKind::DonateClicked, Handler::TrackDonation),
];

pub fn handler_for(kind: UiEventKind) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, handler)| *handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_exactly_one_handler() {
        let kinds = [
            UiEventKind::CardActivated,
            UiEventKind::DownloadActivated,
            UiEventKind::ModalDismissed,
            UiEventKind::ModalDownload,
            UiEventKind::ThemeToggled,
            UiEventKind::AnchorClicked,
            UiEventKind::DonateClicked,
        ];
        for kind in kinds {
            let count = HANDLERS.iter().filter(|(k, _)| *k == kind).count();
            assert_eq!(count, 1, "{:?}", kind);
        }
        assert_eq!(HANDLERS.len(), kinds.len());
    }

    #[test]
    fn card_and_download_both_open_modal() {
        assert_eq!(handler_for(UiEventKind::CardActivated), Some(Handler::OpenModal));
        assert_eq!(handler_for(UiEventKind::DownloadActivated), Some(Handler::OpenModal));
    }

    #[test]
    fn nested_targets() {
        assert!(!ClickTarget::Card.is_nested_control());
        assert!(ClickTarget::NestedLink.is_nested_control());
        assert!(ClickTarget::NestedButton.is_nested_control());
    }
}
