//! Project detail modal lifecycle.
//!
//! Opening the modal makes it visible, clears `aria-hidden` and locks page
//! scrolling; closing undoes all three. Every dismissal trigger leaves the
//! same state behind.

use crate::analytics::{AnalyticsEvent, Tracker};
use crate::events::DismissTrigger;
use crate::types::Project;
use crate::view::ModalView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    pub visible: bool,
    pub aria_hidden: bool,
    pub scroll_locked: bool,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            visible: false,
            aria_hidden: true,
            scroll_locked: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
    content: Option<ModalView>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, project: &Project, contact_email: &str) -> &ModalView {
        tracing::debug!(title = %project.title, "opening project modal");
        self.state = ModalState {
            visible: true,
            aria_hidden: false,
            scroll_locked: true,
        };
        self.content.insert(ModalView::build(project, contact_email))
    }

    pub fn close(&mut self) {
        self.state = ModalState::default();
    }

    /// Handle a dismissal; returns whether the modal closed.
    ///
    /// Escape only acts on an open modal.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        if trigger == DismissTrigger::EscapeKey && !self.state.visible {
            return false;
        }
        tracing::debug!(?trigger, "dismissing project modal");
        self.close();
        true
    }

    pub fn is_open(&self) -> bool {
        self.state.visible
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Content of the last opened project
    pub fn content(&self) -> Option<&ModalView> {
        self.content.as_ref()
    }

    /// Report a download of the shown project; the download itself is
    /// never held up by analytics
    pub fn track_download(&self, tracker: &Tracker) -> bool {
        match self.content.as_ref().and_then(|c| c.download.as_ref()) {
            Some(download) if self.state.visible => {
                tracker.track(AnalyticsEvent::download(&download.title, &download.version));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectStatus;

    fn project() -> Project {
        Project {
            download_url: Some("files/game.zip".into()),
            version: Some("2.0".into()),
            ..Project::new("Game", ProjectStatus::Completed)
        }
    }

    #[test]
    fn open_sets_all_three_effects() {
        let mut modal = ModalController::new();
        let view = modal.open(&project(), "a@b.c");
        assert_eq!(view.title, "Game");
        assert_eq!(
            modal.state(),
            &ModalState {
                visible: true,
                aria_hidden: false,
                scroll_locked: true
            }
        );
    }

    #[test]
    fn every_trigger_leaves_the_same_state() {
        let triggers = [
            DismissTrigger::CloseButton,
            DismissTrigger::Scrim,
            DismissTrigger::EscapeKey,
        ];
        let states: Vec<ModalState> = triggers
            .iter()
            .map(|trigger| {
                let mut modal = ModalController::new();
                modal.open(&project(), "a@b.c");
                assert!(modal.dismiss(*trigger));
                modal.state().clone()
            })
            .collect();
        assert!(states.iter().all(|s| *s == ModalState::default()));
    }

    #[test]
    fn escape_on_closed_modal_is_ignored() {
        let mut modal = ModalController::new();
        assert!(!modal.dismiss(DismissTrigger::EscapeKey));
    }

    #[test]
    fn download_without_analytics_is_fine() {
        let mut modal = ModalController::new();
        modal.open(&project(), "a@b.c");
        assert!(modal.track_download(&Tracker::disabled()));
    }
}
