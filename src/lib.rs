//! Client-side interaction layer for the contact page: the contact form
//! controller with validation and a simulated send, plus the small page
//! behaviors around it (mobile menu, smooth scroll, header shadow, card
//! reveal, contact link analytics).

pub mod context;
pub mod controller;
pub mod error;
pub mod memory;
pub mod model;
pub mod page;
pub mod protocol;
pub mod transport;
pub mod validation;
pub mod view;

pub use context::{FormConfig, FormContext};
pub use controller::{FormHandle, FormSubmissionController};
pub use error::{FormError, Result};
pub use protocol::{SubmissionOutcome, SubmissionRequest, SubmissionState, SubmitAttempt};
