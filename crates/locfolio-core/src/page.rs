//! Page context.
//!
//! [`Page`] owns everything the portfolio page mutates: the loaded grid and
//! its sorted view, the modal, the theme preference, the progress animator
//! and the analytics handle. The UI reads state from it and routes events
//! through [`Page::dispatch`], then applies the returned [`Effect`].

use chrono::{Datelike, Local};

use crate::analytics::{AnalyticsEvent, Tracker};
use crate::animation::{ProgressAnimator, Reveal};
use crate::config::SiteConfig;
use crate::error::FolioResult;
use crate::events::{handler_for, Handler, UiEvent};
use crate::loader::{load_projects, GridState, ProjectSource, RenderedGrid};
use crate::modal::ModalController;
use crate::scroll::{AnchorTarget, ScrollRequest};
use crate::storage::PreferenceStore;
use crate::theme::{Theme, ThemeController};
use crate::types::Project;

/// Side effect the UI applies after an event
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing to do
    None,
    /// Not intercepted; the platform's native behavior proceeds
    PassThrough,
    ModalOpened,
    ModalClosed,
    ThemeApplied(Theme),
    ScrollTo(ScrollRequest),
}

pub struct Page<S> {
    config: SiteConfig,
    current_year: i32,
    grid: GridState,
    modal: ModalController,
    theme: ThemeController<S>,
    tracker: Tracker,
    animator: ProgressAnimator,
}

impl<S: PreferenceStore> Page<S> {
    /// Create the page in the loading state with the saved theme applied
    pub fn new(config: SiteConfig, store: S, tracker: Tracker) -> Self {
        let theme = ThemeController::load_with_key(store, config.theme_key.clone());
        Self {
            grid: GridState::Loading {
                skeletons: config.skeleton_count,
            },
            config,
            current_year: Local::now().year(),
            modal: ModalController::new(),
            theme,
            tracker,
            animator: ProgressAnimator::new(),
        }
    }

    /// Pin the calendar year used for NEW markers and the footer
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Show skeletons and forget the previous grid
    pub fn begin_load(&mut self) {
        self.grid = GridState::Loading {
            skeletons: self.config.skeleton_count,
        };
        self.animator.reset();
    }

    /// Move out of the loading state with a fetch result
    pub fn finish_load(&mut self, result: FolioResult<Vec<Project>>) {
        match result {
            Ok(collection) => {
                let grid =
                    RenderedGrid::build(&collection, self.current_year, &self.config.contact_email);
                for card in grid.cards() {
                    self.animator.register(card.index, card.progress);
                }
                tracing::info!(projects = grid.cards().len(), "project grid rendered");
                self.grid = GridState::Rendered(grid);
            }
            Err(e) => {
                tracing::error!("Failed to load projects: {}", e);
                self.grid = GridState::failed();
            }
        }
    }

    /// Run a whole load: skeletons, one fetch, then render or error
    pub async fn load<P: ProjectSource>(&mut self, source: &P) {
        self.begin_load();
        tracing::info!(source = %source.describe(), "loading projects");
        let result = load_projects(source).await;
        self.finish_load(result);
    }

    /// Allow progress bars to animate; called a short delay after render
    pub fn arm_progress(&mut self) -> Vec<Reveal> {
        self.animator.arm()
    }

    pub fn on_bar_visibility(&mut self, index: usize, visible: bool) -> Option<Reveal> {
        self.animator.on_visibility(index, visible)
    }

    pub fn bar_width(&self, index: usize) -> u8 {
        self.animator.width(index)
    }

    pub fn animator(&self) -> &ProgressAnimator {
        &self.animator
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Effect {
        let Some(handler) = handler_for(event.kind()) else {
            return Effect::None;
        };

        match (handler, event) {
            (Handler::OpenModal, UiEvent::CardActivated { target, .. })
                if target.is_nested_control() =>
            {
                Effect::PassThrough
            }
            (
                Handler::OpenModal,
                UiEvent::CardActivated { index, .. } | UiEvent::DownloadActivated { index },
            ) => self.open_project(index),
            (Handler::CloseModal, UiEvent::ModalDismissed(trigger)) => {
                if self.modal.dismiss(trigger) {
                    Effect::ModalClosed
                } else {
                    Effect::None
                }
            }
            (Handler::TrackDownload, UiEvent::ModalDownload) => {
                self.modal.track_download(&self.tracker);
                Effect::PassThrough
            }
            (Handler::ToggleTheme, UiEvent::ThemeToggled) => {
                Effect::ThemeApplied(self.theme.toggle())
            }
            (Handler::SmoothScroll, UiEvent::AnchorClicked(href)) => {
                match AnchorTarget::parse(&href) {
                    Some(target) => {
                        Effect::ScrollTo(ScrollRequest::new(target, self.config.header_offset))
                    }
                    None => Effect::PassThrough,
                }
            }
            (Handler::TrackDonation, UiEvent::DonateClicked(button)) => {
                self.tracker.track(AnalyticsEvent::donate(button));
                Effect::PassThrough
            }
            (handler, event) => {
                tracing::warn!(?handler, ?event, "event routed to a handler that cannot take it");
                Effect::None
            }
        }
    }

    fn open_project(&mut self, index: usize) -> Effect {
        let project = match &self.grid {
            GridState::Rendered(grid) => grid.resolve(index),
            _ => None,
        };
        match project {
            Some(project) => {
                self.modal.open(project, &self.config.contact_email);
                Effect::ModalOpened
            }
            None => {
                tracing::warn!(index, "no project at card index");
                Effect::None
            }
        }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Year shown in the page footer
    pub fn footer_year(&self) -> String {
        self.current_year.to_string()
    }
}
