//! Best-effort analytics.
//!
//! Reporting is optional: a [`Tracker`] without a backend drops every event,
//! and backends never return errors to the caller.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

/// One analytics event: a name plus a flat payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub params: Map<String, Value>,
}

impl AnalyticsEvent {
    fn new(name: &'static str, category: &str, label: &str) -> Self {
        let mut params = Map::new();
        params.insert("event_category".into(), category.into());
        params.insert("event_label".into(), label.into());
        Self { name, params }
    }

    fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// A localization download started from the project modal
    pub fn download(title: &str, version: &str) -> Self {
        Self::new("download", "localization", title)
            .with("value", 1)
            .with("version", version)
            .with("project_title", title)
    }

    /// One of the donate buttons was clicked
    pub fn donate(button: DonateButton) -> Self {
        Self::new("donate_click", "donation", button.label()).with("location", button.location())
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }
}

/// The instrumented donate buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonateButton {
    /// Donate entry in the navigation menu
    Menu,
    /// Large button in the donate section at the bottom of the page
    Bottom,
}

impl DonateButton {
    pub fn label(&self) -> &'static str {
        match self {
            DonateButton::Menu => "menu_donate_button",
            DonateButton::Bottom => "bottom_donate_button",
        }
    }

    pub fn location(&self) -> &'static str {
        match self {
            DonateButton::Menu => "navigation_menu",
            DonateButton::Bottom => "donate_section",
        }
    }
}

/// Reporting backend
pub trait Analytics: Send + Sync {
    fn send(&self, event: &AnalyticsEvent);
}

/// Backend that only writes events to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn send(&self, event: &AnalyticsEvent) {
        let params = Value::Object(event.params.clone());
        tracing::info!(event = event.name, params = %params, "analytics");
    }
}

/// Optional analytics handle
#[derive(Clone, Default)]
pub struct Tracker {
    backend: Option<Arc<dyn Analytics>>,
}

impl Tracker {
    pub fn new(backend: Arc<dyn Analytics>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Tracker that silently drops everything
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub fn track(&self, event: AnalyticsEvent) {
        match &self.backend {
            Some(backend) => backend.send(&event),
            None => tracing::debug!(event = event.name, "analytics unavailable, event dropped"),
        }
    }
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<AnalyticsEvent>>);

    impl Analytics for Recording {
        fn send(&self, event: &AnalyticsEvent) {
            self.0.lock().push(event.clone());
        }
    }

    #[test]
    fn tracing_backend_accepts_events() {
        let tracker = Tracker::new(Arc::new(TracingAnalytics));
        assert!(tracker.is_enabled());
        tracker.track(AnalyticsEvent::download("Game", "1.0"));
        tracker.track(AnalyticsEvent::donate(DonateButton::Menu));
    }

    #[test]
    fn download_payload() {
        let event = AnalyticsEvent::download("Game", "1.0");
        assert_eq!(event.name, "download");
        assert_eq!(event.param("event_category"), Some(&Value::from("localization")));
        assert_eq!(event.param("event_label"), Some(&Value::from("Game")));
        assert_eq!(event.param("value"), Some(&Value::from(1)));
        assert_eq!(event.param("version"), Some(&Value::from("1.0")));
        assert_eq!(event.param("project_title"), Some(&Value::from("Game")));
    }

    #[test]
    fn donate_payloads() {
        let menu = AnalyticsEvent::donate(DonateButton::Menu);
        assert_eq!(menu.name, "donate_click");
        assert_eq!(menu.param("event_label"), Some(&Value::from("menu_donate_button")));
        assert_eq!(menu.param("location"), Some(&Value::from("navigation_menu")));

        let bottom = AnalyticsEvent::donate(DonateButton::Bottom);
        assert_eq!(bottom.param("location"), Some(&Value::from("donate_section")));
    }

    #[test]
    fn disabled_tracker_is_silent() {
        let tracker = Tracker::disabled();
        assert!(!tracker.is_enabled());
        tracker.track(AnalyticsEvent::donate(DonateButton::Menu));
    }

    #[test]
    fn enabled_tracker_forwards() {
        let recording = Arc::new(Recording::default());
        let tracker = Tracker::new(recording.clone());
        tracker.track(AnalyticsEvent::download("Game", "unknown"));
        assert_eq!(recording.0.lock().len(), 1);
    }
}
