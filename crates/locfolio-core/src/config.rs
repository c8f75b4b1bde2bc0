//! Site configuration.
//!
//! Defaults match the published site; binaries override individual fields
//! from their command line flags.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::escape::encode_uri_component;

/// Number of skeleton cards shown while the data file loads
pub const SKELETON_COUNT: usize = 3;

/// Height of the fixed page header, subtracted from anchor scroll targets
pub const HEADER_OFFSET: f64 = 80.0;

/// Delay between rendering the grid and arming the progress bar reveal
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Persisted preference key for the theme
pub const THEME_KEY: &str = "theme";

/// Address used by the suggestion and bug report links
pub const CONTACT_EMAIL: &str = "sense5.studio.engineer@gmail.com";

/// Mail subject used when no donation page is configured
pub const DONATE_SUBJECT: &str = "Підтримка проєкту";

/// Default location of the project data file
pub const PROJECTS_FILE: &str = "projects.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub projects_path: PathBuf,
    pub contact_email: String,
    pub skeleton_count: usize,
    pub header_offset: f64,
    pub reveal_delay_ms: u64,
    pub theme_key: String,
    /// External donation page; without one the donate button mails the studio
    pub donate_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            projects_path: PathBuf::from(PROJECTS_FILE),
            contact_email: CONTACT_EMAIL.to_string(),
            skeleton_count: SKELETON_COUNT,
            header_offset: HEADER_OFFSET,
            reveal_delay_ms: REVEAL_DELAY.as_millis() as u64,
            theme_key: THEME_KEY.to_string(),
            donate_url: None,
        }
    }
}

impl SiteConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Target of the bottom donate button
    pub fn donate_href(&self) -> String {
        match self.donate_url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => url.to_string(),
            None => format!(
                "mailto:{}?subject={}",
                self.contact_email,
                encode_uri_component(DONATE_SUBJECT)
            ),
        }
    }

    /// Replace the data file location, keeping everything else
    pub fn with_projects_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.projects_path = path.into();
        self
    }
}
