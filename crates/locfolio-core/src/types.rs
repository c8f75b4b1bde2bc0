//! Core types for the localization portfolio

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Lifecycle status of a localization project.
///
/// The data file only uses `completed` and `in_progress`. Anything else is
/// kept as [`ProjectStatus::Other`] rather than failing the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    #[default]
    #[serde(other)]
    Other,
}

impl ProjectStatus {
    /// CSS modifier used by the status indicator
    pub fn css_class(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress | ProjectStatus::Other => "in_progress",
        }
    }

    /// Localized label shown next to the indicator
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Завершено",
            ProjectStatus::InProgress | ProjectStatus::Other => "У процесі",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ProjectStatus::Completed)
    }
}

/// Outbound links of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub store: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub devlog: Option<String>,
}

/// One localization project as described by the data file.
///
/// Every field except `title` is optional; missing or `null` values fall
/// back to defaults and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "whole_number")]
    pub year: Option<i32>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ProjectStatus,
    /// Explicit completion override, clamped when resolved
    #[serde(default, deserialize_with = "whole_number")]
    pub progress: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scope: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default)]
    pub links: Option<ProjectLinks>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
}

/// Read `null` as the field's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read any JSON number as an integer, rounding fractions.
///
/// Values that do not fit the target type are treated as absent.
fn whole_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let value = match number.as_i64() {
        Some(n) => Some(n),
        None => number
            .as_f64()
            .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
            .map(|f| f.round() as i64),
    };
    Ok(value.and_then(|n| T::try_from(n).ok()))
}

impl Project {
    /// Create a project with only a title and status set
    pub fn new(title: impl Into<String>, status: ProjectStatus) -> Self {
        Self {
            title: title.into(),
            status,
            ..Default::default()
        }
    }

    /// Year used for ordering; a missing or zero year sorts as 0
    pub fn sort_year(&self) -> i32 {
        self.year.unwrap_or(0)
    }
}

/// Parse the data file body into the project collection.
///
/// The body must be a JSON array; anything else is a parse error.
pub fn parse_projects(body: &str) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(body)
}
