//! Project data loading and the grid state machine.
//!
//! ```text
//! Loading { skeletons } ──fetch ok──▶ Rendered(RenderedGrid)
//!        │
//!        └──transport error / non-OK status / bad JSON──▶ Error(message)
//! ```
//!
//! There is a single fetch per load, no timeout beyond the transport's own
//! and no retry.

use std::path::{Path, PathBuf};

use crate::error::{FolioError, FolioResult};
use crate::sort::{sort_projects, SortedView};
use crate::types::{parse_projects, Project};
use crate::view::{build_cards, CardView, SoonCardView, LOAD_FAILED};

/// Raw answer of a data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResponse {
    pub status: u16,
    pub body: String,
}

impl SourceResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx statuses count as success
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where the project data file comes from
#[allow(async_fn_in_trait)]
pub trait ProjectSource {
    /// Fetch the data file once
    async fn fetch(&self) -> FolioResult<SourceResponse>;

    /// Human readable location for logs
    fn describe(&self) -> String;
}

/// Data file on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectSource for FileSource {
    async fn fetch(&self) -> FolioResult<SourceResponse> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(SourceResponse::ok(body))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Source answering with a canned response
#[derive(Debug, Clone)]
pub struct StaticSource {
    response: Result<SourceResponse, String>,
}

impl StaticSource {
    pub fn new(response: SourceResponse) -> Self {
        Self {
            response: Ok(response),
        }
    }

    /// Source whose transport always fails
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            response: Err(reason.into()),
        }
    }
}

impl ProjectSource for StaticSource {
    async fn fetch(&self) -> FolioResult<SourceResponse> {
        self.response.clone().map_err(FolioError::Source)
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Fetch and parse the project collection.
///
/// A non-OK status is reported as [`FolioError::Status`], the same way a
/// transport failure is reported.
pub async fn load_projects<S: ProjectSource>(source: &S) -> FolioResult<Vec<Project>> {
    let response = source.fetch().await?;
    if !response.is_ok() {
        return Err(FolioError::Status(response.status));
    }
    Ok(parse_projects(&response.body)?)
}

/// A grid rendered from one sorted view.
///
/// Cards and the view are built together so every card index resolves
/// against the view it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedGrid {
    view: SortedView,
    cards: Vec<CardView>,
    soon: Option<SoonCardView>,
}

impl RenderedGrid {
    pub fn build(collection: &[Project], current_year: i32, contact_email: &str) -> Self {
        let view = sort_projects(collection);
        let cards = build_cards(&view, current_year);
        let soon = (!cards.is_empty()).then(|| SoonCardView::new(contact_email));
        Self { view, cards, soon }
    }

    pub fn view(&self) -> &SortedView {
        &self.view
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    /// Present after a non-empty grid only
    pub fn soon(&self) -> Option<&SoonCardView> {
        self.soon.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn resolve(&self, index: usize) -> Option<&Project> {
        self.view.get(index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridState {
    Loading { skeletons: usize },
    Rendered(RenderedGrid),
    Error(String),
}

impl GridState {
    pub fn failed() -> Self {
        GridState::Error(LOAD_FAILED.to_string())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GridState::Loading { .. })
    }

    pub fn rendered(&self) -> Option<&RenderedGrid> {
        match self {
            GridState::Rendered(grid) => Some(grid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectStatus;

    #[tokio::test]
    async fn non_ok_status_is_an_error() {
        let source = StaticSource::new(SourceResponse::with_status(500, "[]"));
        let err = load_projects(&source).await.unwrap_err();
        assert!(matches!(err, FolioError::Status(500)));
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let source = StaticSource::unreachable("connection refused");
        let err = load_projects(&source).await.unwrap_err();
        assert!(matches!(err, FolioError::Source(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let source = StaticSource::new(SourceResponse::ok(r#"{"title": "not a list"}"#));
        assert!(matches!(
            load_projects(&source).await.unwrap_err(),
            FolioError::Parse(_)
        ));
    }

    #[tokio::test]
    async fn file_source_reads_projects() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, r#"[{"title": "A", "status": "completed"}]"#).unwrap();

        let projects = load_projects(&FileSource::new(&path)).await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].status, ProjectStatus::Completed);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = load_projects(&FileSource::new("/nonexistent/projects.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn rendered_grid_indices_follow_sorted_view() {
        let collection = vec![
            Project::new("done", ProjectStatus::Completed),
            Project::new("wip", ProjectStatus::InProgress),
        ];
        let grid = RenderedGrid::build(&collection, 2026, "a@b.c");
        for card in grid.cards() {
            assert_eq!(grid.resolve(card.index).unwrap().title, card.title);
        }
        assert_eq!(grid.cards()[0].title, "wip");
        assert!(grid.soon().is_some());
    }

    #[test]
    fn empty_grid_has_no_soon_card() {
        let grid = RenderedGrid::build(&[], 2026, "a@b.c");
        assert!(grid.is_empty());
        assert!(grid.soon().is_none());
    }
}
