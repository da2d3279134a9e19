// src/controller/mod.rs

use crate::context::FormContext;
use crate::error::Result;
use crate::memory::Journal;
use crate::model::{FieldId, FormField};
use crate::protocol::{SubmissionOutcome, SubmissionRequest, SubmissionState, SubmitAttempt};
use crate::validation::{FieldIssue, validate_fields};
use crate::view::{FORM_ID, FormBindings, FormView, SUCCESS_ID};
use parking_lot::Mutex;
use std::ops::Deref;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

struct Inner {
    view: Box<dyn FormView>,
    context: FormContext,
    bindings: FormBindings,
    fields: Vec<FormField>,
    state: SubmissionState,
}

impl Inner {
    fn validate(&mut self) -> Vec<FieldIssue> {
        self.view.clear_errors();
        self.bindings.read_into(&*self.view, &mut self.fields);

        let issues = validate_fields(&self.fields);
        let messages = &self.context.config.messages;

        for field in self.fields.iter_mut() {
            match issues.iter().find(|issue| issue.field == field.id) {
                Some(issue) => {
                    let message = issue.error.message(messages);
                    field.mark_invalid(issue.error.validity(), message);
                    self.view.show_field_error(field.id, message);
                }
                None => field.mark_valid(),
            }
        }

        issues
    }
}

/// Drives one contact form: validation, error rendering and the simulated
/// send that swaps the form for its success message.
pub struct FormSubmissionController {
    inner: Mutex<Inner>,
    cancel: CancellationToken,
}

impl FormSubmissionController {
    /// Resolves the element bindings and wires up a controller. Fails if the
    /// view is missing any element the form needs.
    pub fn attach<V: FormView + 'static>(view: V, context: FormContext) -> Result<FormHandle> {
        let bindings = FormBindings::resolve(&view, &context.config)?;
        let fields = bindings.new_fields();
        info!(
            form = FORM_ID,
            required = bindings.required().count(),
            transport = context.transport().name(),
            "contact form attached"
        );

        let controller = Self {
            inner: Mutex::new(Inner {
                view: Box::new(view),
                context,
                bindings,
                fields,
                state: SubmissionState::Idle,
            }),
            cancel: CancellationToken::new(),
        };

        Ok(FormHandle {
            controller: Arc::new(controller),
        })
    }

    /// Clears all rendered errors, then checks every required field and
    /// renders one annotation per invalid field.
    pub fn validate(&self) -> Vec<FieldIssue> {
        self.inner.lock().validate()
    }

    pub async fn attempt_submit(&self) -> SubmitAttempt {
        if self.cancel.is_cancelled() {
            return SubmitAttempt::Disposed;
        }

        let (request, delay, original_label) = {
            let mut inner = self.inner.lock();
            match inner.state {
                SubmissionState::Sending => {
                    warn!("submit ignored, a send is already pending");
                    return SubmitAttempt::InFlight;
                }
                SubmissionState::Succeeded => return SubmitAttempt::AlreadySubmitted,
                SubmissionState::Idle => {}
            }

            let issues = inner.validate();
            if !issues.is_empty() {
                debug!(invalid = issues.len(), "validation failed");
                return SubmitAttempt::Rejected(issues);
            }

            let request = SubmissionRequest::from_fields(&inner.fields);
            let original_label = inner.view.submit_label();
            let sending_label = inner.context.config.sending_label.clone();
            inner.view.set_submit_control(&sending_label, true);
            inner.state = SubmissionState::Sending;

            (request, inner.context.latency(), original_label)
        };

        info!(?delay, "sending contact form");

        tokio::select! {
            _ = self.cancel.cancelled() => {
                let mut inner = self.inner.lock();
                inner.view.set_submit_control(&original_label, false);
                inner.state = SubmissionState::Idle;
                inner.context.record("cancelled", &request.to_json().to_string());
                warn!("pending send cancelled");
                return SubmitAttempt::Cancelled;
            }
            _ = tokio::time::sleep(delay) => {}
        }

        let mut inner = self.inner.lock();
        let receipt = inner.context.transport().deliver(&request);
        inner.context.record("submission", &receipt.payload.to_string());

        inner.view.set_visible(FORM_ID, false);
        inner.view.set_visible(SUCCESS_ID, true);
        inner.view.scroll_into_view(SUCCESS_ID);
        inner.state = SubmissionState::Succeeded;
        info!(transport = %receipt.transport, "contact form sent");

        SubmitAttempt::Delivered(SubmissionOutcome::Success(receipt))
    }

    pub fn state(&self) -> SubmissionState {
        self.inner.lock().state
    }

    pub fn field(&self, id: FieldId) -> Option<FormField> {
        self.inner.lock().fields.iter().find(|field| field.id == id).cloned()
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.inner.lock().fields.clone()
    }

    /// Labels and payloads recorded so far, oldest first.
    pub fn journal(&self) -> Vec<(String, String)> {
        self.inner
            .lock()
            .context
            .journal()
            .entries()
            .iter()
            .map(|entry| (entry.label.clone(), entry.content.clone()))
            .collect()
    }
}

/// Owns an attached controller. Disposing (or dropping) the handle cancels a
/// pending send and makes further submits return `Disposed`.
pub struct FormHandle {
    controller: Arc<FormSubmissionController>,
}

impl FormHandle {
    pub fn controller(&self) -> Arc<FormSubmissionController> {
        Arc::clone(&self.controller)
    }

    pub fn dispose(self) {
        drop(self);
    }
}

impl Deref for FormHandle {
    type Target = FormSubmissionController;

    fn deref(&self) -> &Self::Target {
        &self.controller
    }
}

impl Drop for FormHandle {
    fn drop(&mut self) {
        debug!("contact form detached");
        self.controller.cancel.cancel();
    }
}
