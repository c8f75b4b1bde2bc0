//! Analytics backend for the desktop webview.
//!
//! Forwards events to a page-level `gtag` function when the page defines
//! one. The existence check runs inside the script, so a missing tracker is
//! a silent no-op. Every event is also handed to an inner backend.

use dioxus::prelude::*;
use locfolio_core::{Analytics, AnalyticsEvent};
use serde_json::Value;

/// Script that reports `event` through `gtag` if it is defined
pub fn gtag_script(event: &AnalyticsEvent) -> String {
    let name = Value::from(event.name);
    let params = Value::Object(event.params.clone());
    format!("if (typeof window.gtag === 'function') {{ window.gtag('event', {name}, {params}); }}")
}

pub struct GtagAnalytics<A> {
    inner: A,
}

impl<A: Analytics> GtagAnalytics<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A: Analytics> Analytics for GtagAnalytics<A> {
    fn send(&self, event: &AnalyticsEvent) {
        self.inner.send(event);
        // fire and forget; the result carries nothing
        let _ = document::eval(&gtag_script(event));
    }
}
