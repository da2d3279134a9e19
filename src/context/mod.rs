// src/context/mod.rs

pub mod config;

pub use config::{FormConfig, Messages};

use crate::memory::{InMemoryJournal, Journal};
use crate::transport::{SimulatedTransport, Transport};
use std::time::Duration;

/// Runtime context for a form: configuration, the transport used to send
/// submissions, and the submission journal.
pub struct FormContext {
    pub config: FormConfig,
    pub transport: Box<dyn Transport + Send + Sync>,
    pub journal: InMemoryJournal,
    latency: Option<Duration>,
}

impl FormContext {
    pub fn new(config: FormConfig) -> Self {
        let transport = SimulatedTransport::new(config.submit_delay());
        Self {
            config,
            transport: Box::new(transport),
            journal: InMemoryJournal::new(),
            latency: None,
        }
    }

    pub fn with_transport<T: Transport + Send + Sync + 'static>(mut self, transport: T) -> Self {
        self.transport = Box::new(transport);
        self
    }

    /// Overrides how long a send waits, whichever transport is installed.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.config.submit_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.latency = Some(delay);
        self
    }

    pub fn with_sending_label(mut self, label: &str) -> Self {
        self.config.sending_label = label.into();
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.config.messages = messages;
        self
    }

    pub fn transport(&self) -> &(dyn Transport + Send + Sync) {
        self.transport.as_ref()
    }

    /// The wait before `deliver`: the explicit override if one was set,
    /// otherwise the transport's own latency.
    pub fn latency(&self) -> Duration {
        self.latency.unwrap_or_else(|| self.transport.latency())
    }

    pub fn journal(&self) -> &InMemoryJournal {
        &self.journal
    }

    pub fn record(&mut self, label: &str, content: &str) {
        self.journal.record(label, content);
    }
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
