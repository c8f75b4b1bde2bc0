//! Page context provider for the portfolio.
//!
//! Provides the core [`Page`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut page = use_page();
//!
//! // Read state
//! let theme = page.read().theme();
//!
//! // Route a user event and apply what comes back
//! let effect = page.write().dispatch(UiEvent::ThemeToggled);
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use locfolio_core::{
    MemoryPreferences, Page, PreferenceStore, RedbPreferences, SiteConfig, Tracker,
    TracingAnalytics,
};

use crate::gtag::GtagAnalytics;

/// Preference store behind the page.
///
/// Normally redb in the data directory; an in-memory store when that
/// database cannot be opened, so the page still works for the session.
pub type SharedPreferences = Arc<dyn PreferenceStore>;

/// The page as held in context
pub type PortfolioPage = Page<SharedPreferences>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Open the preference store, falling back to memory on failure
pub fn open_preferences() -> SharedPreferences {
    let path = get_data_dir().join("preferences.redb");
    match RedbPreferences::open(&path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!("Failed to open preferences at {:?}: {}", path, e);
            Arc::new(MemoryPreferences::new())
        }
    }
}

/// Build the page with the saved theme and both analytics sinks
pub fn new_page() -> PortfolioPage {
    let mut config = SiteConfig::default().with_projects_path(crate::get_projects_path());
    config.donate_url = crate::get_donate_url();
    let tracker = Tracker::new(Arc::new(GtagAnalytics::new(TracingAnalytics)));
    Page::new(config, open_preferences(), tracker)
}

/// Hook to access the page from context.
///
/// Returns the Signal holding the page. Reading subscribes the component to
/// page changes; writing notifies every subscriber.
pub fn use_page() -> Signal<PortfolioPage> {
    use_context::<Signal<PortfolioPage>>()
}
