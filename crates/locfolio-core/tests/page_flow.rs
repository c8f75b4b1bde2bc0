//! End-to-end page flows
//!
//! Drives a `Page` the way the UI does: load through a source, render the
//! grid, route user events, and check what would be on screen.

use std::sync::Arc;

use locfolio_core::render::{grid_html, modal_html, skeletons_html};
use locfolio_core::view::{Instructions, SoonCardView, EMPTY_STATE, LOAD_FAILED};
use locfolio_core::{
    Analytics, AnalyticsEvent, ClickTarget, DismissTrigger, Effect, GridState, MemoryPreferences,
    Page, RedbPreferences, SiteConfig, SourceResponse, StaticSource, Theme, Tracker, UiEvent,
};
use parking_lot::Mutex;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

#[derive(Default)]
struct RecordingAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl Analytics for RecordingAnalytics {
    fn send(&self, event: &AnalyticsEvent) {
        self.events.lock().push(event.clone());
    }
}

fn new_page() -> Page<MemoryPreferences> {
    Page::new(SiteConfig::default(), MemoryPreferences::new(), Tracker::disabled())
        .with_current_year(2026)
}

/// What the grid container would contain for the current state
fn grid_contents<S: locfolio_core::PreferenceStore>(page: &Page<S>) -> String {
    match page.grid() {
        GridState::Loading { skeletons } => skeletons_html(*skeletons),
        GridState::Rendered(grid) => grid_html(
            grid.cards(),
            &SoonCardView::new(page.config().contact_email.clone()),
        ),
        GridState::Error(message) => format!(r#"<p class="empty-state">{}</p>"#, message),
    }
}

const TWO_PROJECTS: &str = r#"[
    {
        "title": "Старий квест",
        "year": 2021,
        "status": "completed",
        "links": {"store": "https://store.example/old"},
        "instructions": "Завантажте архів\nРозпакуйте в папку гри\nЗапустіть гру"
    },
    {
        "title": "Новий проєкт",
        "year": 2026,
        "status": "in_progress",
        "progress": 35,
        "downloadUrl": "files/new.zip"
    }
]"#;

async fn loaded_page(body: &str) -> Page<MemoryPreferences> {
    let mut page = new_page();
    page.load(&StaticSource::new(SourceResponse::ok(body))).await;
    page
}

// ============================================================================
// Grid Loading
// ============================================================================

#[tokio::test]
async fn skeletons_show_before_fetch() {
    let page = new_page();
    let html = grid_contents(&page);
    assert_eq!(html.matches("skeleton-card").count(), 3);
}

#[tokio::test]
async fn empty_collection_shows_empty_state_only() {
    let page = loaded_page("[]").await;
    let html = grid_contents(&page);
    assert!(html.contains(EMPTY_STATE));
    assert!(!html.contains("project-card-soon"));
    assert!(!html.contains("skeleton-card"));
}

#[tokio::test]
async fn completed_project_without_progress_is_full() {
    let page = loaded_page(r#"[{"title": "Done", "year": 2023, "status": "completed"}]"#).await;
    let grid = page.grid().rendered().expect("grid rendered");
    assert_eq!(grid.cards()[0].progress, 100);

    let html = grid_contents(&page);
    assert!(html.contains(r#"data-progress="100""#));
    assert!(html.contains("Завершено"));
    assert!(html.contains("project-card-soon"));
}

#[tokio::test]
async fn null_fields_still_render_every_card() {
    let page = loaded_page(
        r#"[
            {"title": "A", "status": "completed", "scope": null, "featured": null},
            {"title": "B", "status": "in_progress", "progress": 50.0}
        ]"#,
    )
    .await;
    let grid = page.grid().rendered().expect("grid rendered");
    assert_eq!(grid.cards().len(), 2);
    assert_eq!(grid.cards()[0].title, "B");
    assert_eq!(grid.cards()[0].progress, 50);
    assert_eq!(grid.cards()[1].progress, 100);
}

#[tokio::test]
async fn server_error_shows_failure_not_empty_state() {
    let mut page = new_page();
    page.load(&StaticSource::new(SourceResponse::with_status(500, "oops")))
        .await;

    assert_eq!(page.grid(), &GridState::Error(LOAD_FAILED.to_string()));
    let html = grid_contents(&page);
    assert!(html.contains(LOAD_FAILED));
    assert!(!html.contains(EMPTY_STATE));
    assert!(!html.contains("skeleton-card"));
}

#[tokio::test]
async fn unreachable_source_shows_failure() {
    let mut page = new_page();
    page.load(&StaticSource::unreachable("offline")).await;
    assert!(matches!(page.grid(), GridState::Error(_)));
}

#[tokio::test]
async fn in_progress_card_comes_first_and_is_new() {
    let page = loaded_page(TWO_PROJECTS).await;
    let grid = page.grid().rendered().unwrap();
    assert_eq!(grid.cards()[0].title, "Новий проєкт");
    assert!(grid.cards()[0].is_new);
    assert!(!grid.cards()[1].is_new);
}

// ============================================================================
// Modal
// ============================================================================

#[tokio::test]
async fn card_click_opens_modal_with_that_project() {
    let mut page = loaded_page(TWO_PROJECTS).await;

    let effect = page.dispatch(UiEvent::CardActivated {
        index: 1,
        target: ClickTarget::Card,
    });
    assert_eq!(effect, Effect::ModalOpened);

    let modal = page.modal();
    assert!(modal.is_open());
    assert!(!modal.state().aria_hidden);
    assert!(modal.state().scroll_locked);

    let view = modal.content().unwrap();
    assert_eq!(view.title, "Старий квест");
    match &view.instructions {
        Instructions::Steps(lines) => assert_eq!(lines.len(), 3),
        Instructions::Pending => panic!("instructions expected"),
    }
    assert_eq!(modal_html(view).matches("<p>").count(), 3);
}

#[tokio::test]
async fn store_link_click_does_not_open_modal() {
    let mut page = loaded_page(TWO_PROJECTS).await;
    let effect = page.dispatch(UiEvent::CardActivated {
        index: 1,
        target: ClickTarget::NestedLink,
    });
    assert_eq!(effect, Effect::PassThrough);
    assert!(!page.modal().is_open());
}

#[tokio::test]
async fn card_download_button_opens_modal() {
    let mut page = loaded_page(TWO_PROJECTS).await;
    assert_eq!(
        page.dispatch(UiEvent::DownloadActivated { index: 0 }),
        Effect::ModalOpened
    );
    let download = page.modal().content().unwrap().download.clone().unwrap();
    assert_eq!(download.url, "files/new.zip");
}

#[tokio::test]
async fn all_dismissals_close_identically() {
    for trigger in [
        DismissTrigger::CloseButton,
        DismissTrigger::Scrim,
        DismissTrigger::EscapeKey,
    ] {
        let mut page = loaded_page(TWO_PROJECTS).await;
        page.dispatch(UiEvent::CardActivated {
            index: 0,
            target: ClickTarget::Card,
        });
        assert_eq!(
            page.dispatch(UiEvent::ModalDismissed(trigger)),
            Effect::ModalClosed
        );
        let state = page.modal().state();
        assert!(!state.visible);
        assert!(state.aria_hidden);
        assert!(!state.scroll_locked);
    }
}

#[tokio::test]
async fn modal_download_reports_analytics() {
    let analytics = Arc::new(RecordingAnalytics::default());
    let mut page = Page::new(
        SiteConfig::default(),
        MemoryPreferences::new(),
        Tracker::new(analytics.clone()),
    )
    .with_current_year(2026);
    page.load(&StaticSource::new(SourceResponse::ok(TWO_PROJECTS)))
        .await;

    page.dispatch(UiEvent::CardActivated {
        index: 0,
        target: ClickTarget::Card,
    });
    assert_eq!(page.dispatch(UiEvent::ModalDownload), Effect::PassThrough);

    let events = analytics.events.lock();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "download");
    assert_eq!(
        events[0].param("version"),
        Some(&serde_json::Value::from("unknown"))
    );
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn theme_toggle_survives_reload() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("preferences.redb");

    {
        let store = RedbPreferences::open(&db_path).unwrap();
        let mut page = Page::new(SiteConfig::default(), store, Tracker::disabled());
        assert_eq!(page.theme(), Theme::Dark);
        assert_eq!(
            page.dispatch(UiEvent::ThemeToggled),
            Effect::ThemeApplied(Theme::Light)
        );
    }

    let store = RedbPreferences::open(&db_path).unwrap();
    let page = Page::new(SiteConfig::default(), store, Tracker::disabled());
    assert_eq!(page.theme(), Theme::Light);
}

// ============================================================================
// Progress Animation
// ============================================================================

#[tokio::test]
async fn bars_reveal_once_when_visible() {
    let mut page = loaded_page(TWO_PROJECTS).await;
    assert_eq!(page.bar_width(0), 0);

    page.arm_progress();
    assert_eq!(page.bar_width(0), 0);

    let reveal = page.on_bar_visibility(0, true).expect("revealed");
    assert_eq!(reveal.target, 35);
    assert_eq!(page.bar_width(0), 35);
    assert!(page.on_bar_visibility(0, true).is_none());
    assert!(!page.animator().is_observing(0));
    assert!(page.animator().is_observing(1));
}
