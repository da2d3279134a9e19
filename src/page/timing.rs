// src/page/timing.rs

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Runs the most recent call once `wait` has passed without another call.
pub struct Debounce {
    wait: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            action();
        }));
    }
}

impl Drop for Debounce {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

/// Runs a call immediately, then drops calls until `limit` has passed.
pub struct Throttle {
    limit: Duration,
    blocked_until: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            blocked_until: None,
        }
    }

    /// Returns whether the action ran.
    pub fn call<F: FnOnce()>(&mut self, action: F) -> bool {
        let now = Instant::now();
        if self.blocked_until.is_some_and(|until| now < until) {
            return false;
        }

        action();
        self.blocked_until = Some(now + self.limit);
        true
    }
}
