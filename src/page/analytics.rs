// src/page/analytics.rs

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub action: &'static str,
    pub event_category: &'static str,
    pub event_label: &'static str,
}

/// Receives tracked events, e.g. a gtag bridge.
pub trait AnalyticsSink {
    fn track(&self, event: &AnalyticsEvent);
}

/// Tracks click-to-call and email link clicks.
pub struct ContactLinkTracker {
    sink: Option<Box<dyn AnalyticsSink + Send + Sync>>,
}

impl ContactLinkTracker {
    pub fn new() -> Self {
        Self { sink: None }
    }

    pub fn with_sink<S: AnalyticsSink + Send + Sync + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn classify(href: &str) -> Option<AnalyticsEvent> {
        let label = if href.starts_with("tel:") {
            "Phone Click"
        } else if href.starts_with("mailto:") {
            "Email Click"
        } else {
            return None;
        };

        Some(AnalyticsEvent {
            action: "click",
            event_category: "Contact",
            event_label: label,
        })
    }

    /// Returns the event if one was handed to the sink.
    pub fn on_click(&self, href: &str) -> Option<AnalyticsEvent> {
        let sink = self.sink.as_ref()?;
        let event = Self::classify(href)?;
        sink.track(&event);
        Some(event)
    }
}

impl Default for ContactLinkTracker {
    fn default() -> Self {
        Self::new()
    }
}
