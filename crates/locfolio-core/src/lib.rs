//! Localization Portfolio Core Library
//!
//! Data model, rendering and page controllers for a studio's
//! game-localization portfolio.
//!
//! ## Overview
//!
//! The portfolio loads a JSON list of projects, shows them as cards ordered
//! by status and recency, animates each card's progress bar once it comes
//! into view, and opens a detail modal with install instructions when a card
//! is activated. A theme toggle with a persisted preference, smooth in-page
//! scrolling and best-effort analytics round it off.
//!
//! Nothing here touches a real DOM: the desktop UI (and the static site
//! builder in the CLI) render from the view models and feed user input back
//! as [`UiEvent`]s.
//!
//! ## Quick Start
//!
//! ```ignore
//! use locfolio_core::{FileSource, MemoryPreferences, Page, SiteConfig, Tracker};
//!
//! let mut page = Page::new(SiteConfig::default(), MemoryPreferences::new(), Tracker::disabled());
//! page.load(&FileSource::new("projects.json")).await;
//!
//! if let Some(grid) = page.grid().rendered() {
//!     for card in grid.cards() {
//!         println!("{} {}%", card.title, card.progress);
//!     }
//! }
//! ```

pub mod analytics;
pub mod animation;
pub mod config;
pub mod error;
pub mod escape;
pub mod events;
pub mod loader;
pub mod logging;
pub mod modal;
pub mod page;
pub mod progress;
pub mod render;
pub mod scroll;
pub mod sort;
pub mod storage;
pub mod template;
pub mod theme;
pub mod types;
pub mod view;

// Re-exports
pub use analytics::{Analytics, AnalyticsEvent, DonateButton, Tracker, TracingAnalytics};
pub use animation::{ProgressAnimator, Reveal};
pub use config::SiteConfig;
pub use error::{FolioError, FolioResult};
pub use escape::{encode_uri_component, escape_html};
pub use events::{ClickTarget, DismissTrigger, UiEvent};
pub use loader::{
    load_projects, FileSource, GridState, ProjectSource, RenderedGrid, SourceResponse,
    StaticSource,
};
pub use modal::{ModalController, ModalState};
pub use page::{Effect, Page};
pub use progress::resolve_progress;
pub use sort::{sort_projects, SortedView};
pub use storage::{MemoryPreferences, PreferenceStore, RedbPreferences};
pub use theme::{Theme, ThemeController};
pub use types::{parse_projects, Project, ProjectLinks, ProjectStatus};
