// src/transport/simulated.rs

use crate::protocol::{DeliveryReceipt, SubmissionRequest};
use crate::transport::Transport;
use std::time::Duration;

/// Stands in for a backend call: waits a fixed latency and always succeeds.
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl Transport for SimulatedTransport {
    fn name(&self) -> &str {
        "simulated"
    }

    fn description(&self) -> &str {
        "Waits a fixed latency and accepts every submission without network I/O."
    }

    fn latency(&self) -> Duration {
        self.latency
    }

    fn deliver(&self, request: &SubmissionRequest) -> DeliveryReceipt {
        let payload = request.to_json();
        tracing::info!(transport = self.name(), %payload, "form data");
        DeliveryReceipt {
            transport: self.name().into(),
            payload,
        }
    }
}
