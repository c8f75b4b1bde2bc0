//! Card view models.
//!
//! A [`CardView`] holds everything one grid card shows, already resolved
//! from its [`Project`]. Text is kept raw here; markup renderers escape it.

use crate::escape::encode_uri_component;
use crate::progress::resolve_progress;
use crate::sort::SortedView;
use crate::types::{Project, ProjectStatus};

/// Kind of outbound project link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Store,
    Repo,
    Devlog,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Store => "Сторінка гри",
            LinkKind::Repo => "Repo",
            LinkKind::Devlog => "Devlog",
        }
    }
}

/// Outbound link, always opened in a new browsing context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub kind: LinkKind,
    pub url: String,
}

/// Resolved content of one project card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Position in the sorted view the card was built from
    pub index: usize,
    pub title: String,
    pub is_new: bool,
    pub featured: bool,
    pub image: Option<String>,
    /// Year and platform chips, in that order
    pub meta: Vec<String>,
    pub status: ProjectStatus,
    /// Target width of the progress bar; bars start at 0%
    pub progress: u8,
    pub scope: Vec<String>,
    pub summary: Option<String>,
    pub has_download: bool,
    pub links: Vec<CardLink>,
}

pub(crate) fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

impl CardView {
    pub fn build(project: &Project, index: usize, current_year: i32) -> Self {
        let mut meta = Vec::new();
        if let Some(year) = project.year.filter(|y| *y != 0) {
            meta.push(year.to_string());
        }
        if let Some(platform) = non_empty(project.platform.as_ref()) {
            meta.push(platform);
        }

        let mut links = Vec::new();
        if let Some(l) = &project.links {
            for (kind, url) in [
                (LinkKind::Store, &l.store),
                (LinkKind::Repo, &l.repo),
                (LinkKind::Devlog, &l.devlog),
            ] {
                if let Some(url) = non_empty(url.as_ref()) {
                    links.push(CardLink { kind, url });
                }
            }
        }

        Self {
            index,
            title: project.title.clone(),
            is_new: project.year == Some(current_year),
            featured: project.featured,
            image: non_empty(project.image.as_ref()),
            meta,
            status: project.status,
            progress: resolve_progress(project),
            scope: project.scope.clone(),
            summary: non_empty(project.summary.as_ref()),
            has_download: non_empty(project.download_url.as_ref()).is_some(),
            links,
        }
    }
}

/// Build the card views of a sorted view, indices included
pub fn build_cards(view: &SortedView, current_year: i32) -> Vec<CardView> {
    view.iter()
        .map(|(index, project)| CardView::build(project, index, current_year))
        .collect()
}

/// The trailing "coming soon" card with its suggestion link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoonCardView {
    pub contact_email: String,
}

impl SoonCardView {
    pub const TITLE: &'static str = "Скоро";
    pub const SUMMARY: &'static str = "Незабаром тут з'являться нові проєкти локалізації. Якщо у вас є пропозиція щодо гри, яку варто локалізувати — напишіть нам.";
    pub const LINK_LABEL: &'static str = "Запропонувати";
    const SUBJECT: &'static str = "Пропозиція локалізації";

    pub fn new(contact_email: impl Into<String>) -> Self {
        Self {
            contact_email: contact_email.into(),
        }
    }

    pub fn mailto(&self) -> String {
        format!(
            "mailto:{}?subject={}",
            self.contact_email,
            encode_uri_component(Self::SUBJECT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectLinks;

    #[test]
    fn completed_card_without_progress() {
        let project = Project {
            year: Some(2023),
            ..Project::new("Done", ProjectStatus::Completed)
        };
        let card = CardView::build(&project, 4, 2026);
        assert_eq!(card.index, 4);
        assert_eq!(card.progress, 100);
        assert_eq!(card.status.label(), "Завершено");
        assert_eq!(card.meta, vec!["2023".to_string()]);
        assert!(!card.is_new);
        assert!(!card.has_download);
    }

    #[test]
    fn new_marker_matches_current_year() {
        let project = Project {
            year: Some(2026),
            ..Project::new("Fresh", ProjectStatus::InProgress)
        };
        assert!(CardView::build(&project, 0, 2026).is_new);
        assert!(!CardView::build(&project, 0, 2027).is_new);
    }

    #[test]
    fn links_keep_fixed_order_and_skip_empty() {
        let project = Project {
            links: Some(ProjectLinks {
                store: Some("https://s".into()),
                repo: Some(String::new()),
                devlog: Some("https://d".into()),
            }),
            ..Project::new("Linked", ProjectStatus::InProgress)
        };
        let card = CardView::build(&project, 0, 2026);
        let kinds: Vec<_> = card.links.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LinkKind::Store, LinkKind::Devlog]);
        assert_eq!(card.links[0].kind.label(), "Сторінка гри");
    }

    #[test]
    fn meta_includes_platform() {
        let project = Project {
            platform: Some("Switch".into()),
            ..Project::new("P", ProjectStatus::InProgress)
        };
        assert_eq!(CardView::build(&project, 0, 2026).meta, vec!["Switch".to_string()]);
    }

    #[test]
    fn soon_card_mailto_is_encoded() {
        let soon = SoonCardView::new("studio@example.com");
        let href = soon.mailto();
        assert!(href.starts_with("mailto:studio@example.com?subject="));
        assert!(!href.contains(' '));
    }
}
