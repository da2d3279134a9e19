// src/transport/mod.rs

use crate::protocol::{DeliveryReceipt, SubmissionRequest};
use std::time::Duration;

/// Pluggable delivery of a validated submission.
pub trait Transport {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// How long the send is expected to take. The controller waits this long
    /// before calling `deliver`.
    fn latency(&self) -> Duration;
    fn deliver(&self, request: &SubmissionRequest) -> DeliveryReceipt;
}

pub mod simulated;
pub use simulated::SimulatedTransport;
