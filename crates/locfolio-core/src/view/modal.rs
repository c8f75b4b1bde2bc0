//! Detail view shown in the project modal.

use chrono::{DateTime, Datelike, NaiveDate};

use super::card::non_empty;
use crate::escape::encode_uri_component;
use crate::types::Project;

/// Shown instead of steps when a project has no install instructions
pub const INSTRUCTIONS_PENDING: &str = "Інструкції будуть додані найближчим часом.";

const MONTHS_GENITIVE: [&str; 12] = [
    "січня",
    "лютого",
    "березня",
    "квітня",
    "травня",
    "червня",
    "липня",
    "серпня",
    "вересня",
    "жовтня",
    "листопада",
    "грудня",
];

/// Format a release date the long Ukrainian way, e.g. `15 березня 2024 р.`
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp; anything else yields `None`.
pub fn format_release_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))?;
    let month = MONTHS_GENITIVE[date.month0() as usize];
    Some(format!("{} {} {} р.", date.day(), month, date.year()))
}

/// Download action of the modal, carrying what analytics reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadAction {
    pub url: String,
    pub title: String,
    /// `unknown` when the project has no version
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instructions {
    /// One entry per line of the source text
    Steps(Vec<String>),
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub image: Option<String>,
    pub version: Option<String>,
    pub release_date: Option<String>,
    pub platform: Option<String>,
    pub instructions: Instructions,
    pub download: Option<DownloadAction>,
    pub bug_report_href: String,
}

impl ModalView {
    pub fn build(project: &Project, contact_email: &str) -> Self {
        let instructions = match non_empty(project.instructions.as_ref()) {
            Some(text) => Instructions::Steps(
                text.split('\n')
                    .map(|line| line.trim_end_matches('\r').to_string())
                    .collect(),
            ),
            None => Instructions::Pending,
        };

        let download = non_empty(project.download_url.as_ref()).map(|url| DownloadAction {
            url,
            title: project.title.clone(),
            version: non_empty(project.version.as_ref()).unwrap_or_else(|| "unknown".to_string()),
        });

        let subject = format!("{}: Знайшов помилку", project.title);

        Self {
            title: project.title.clone(),
            image: non_empty(project.image.as_ref()),
            version: non_empty(project.version.as_ref()),
            release_date: project.release_date.as_deref().and_then(format_release_date),
            platform: non_empty(project.platform.as_ref()),
            instructions,
            download,
            bug_report_href: format!(
                "mailto:{}?subject={}",
                contact_email,
                encode_uri_component(&subject)
            ),
        }
    }
}
