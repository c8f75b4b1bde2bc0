//! Display ordering of the project collection.
//!
//! Projects still in progress come first, then everything else; inside each
//! group newer years come first. Missing years count as 0 and equal keys
//! keep their input order.

use std::cmp::Reverse;

use crate::types::{Project, ProjectStatus};

/// Render-order projection of the project collection.
///
/// Card indices are positions in this view, so a click handler must resolve
/// an index against the same view the cards were rendered from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortedView {
    projects: Vec<Project>,
}

impl SortedView {
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Resolve a rendered index back to its record
    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Project)> {
        self.projects.iter().enumerate()
    }

    pub fn as_slice(&self) -> &[Project] {
        &self.projects
    }
}

fn status_rank(status: ProjectStatus) -> u8 {
    match status {
        ProjectStatus::InProgress => 0,
        ProjectStatus::Completed | ProjectStatus::Other => 1,
    }
}

/// Build a fresh sorted view; the input is left as it was
pub fn sort_projects(projects: &[Project]) -> SortedView {
    let mut sorted = projects.to_vec();
    sorted.sort_by_key(|p| (status_rank(p.status), Reverse(p.sort_year())));
    SortedView { projects: sorted }
}
