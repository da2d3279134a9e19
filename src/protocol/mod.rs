// src/protocol/mod.rs

use crate::model::{FieldId, FormField};
use crate::validation::FieldIssue;
use serde::{Deserialize, Serialize};

/// Snapshot of the form taken once validation has passed. This is the shape a
/// real transport would put on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub job_type: String,
    pub description: String,
    pub site_visit: bool,
}

impl SubmissionRequest {
    pub fn from_fields(fields: &[FormField]) -> Self {
        let text = |id: FieldId| {
            fields
                .iter()
                .find(|field| field.id == id)
                .map(|field| field.value.as_text())
                .unwrap_or_default()
        };

        Self {
            name: text(FieldId::Name).trim().to_string(),
            email: text(FieldId::Email).trim().to_string(),
            phone: text(FieldId::Phone).trim().to_string(),
            address: text(FieldId::Address).trim().to_string(),
            // select values are taken verbatim
            job_type: text(FieldId::JobType).to_string(),
            description: text(FieldId::Description).trim().to_string(),
            site_visit: fields
                .iter()
                .any(|field| field.id == FieldId::SiteVisit && field.value.as_flag()),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "email": self.email,
            "phone": self.phone,
            "address": self.address,
            "jobType": self.job_type,
            "description": self.description,
            "siteVisit": self.site_visit,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub transport: String,
    pub payload: serde_json::Value,
}

/// Sends cannot fail yet, so success is the only outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success(DeliveryReceipt),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed; the issues are rendered next to their fields.
    Rejected(Vec<FieldIssue>),
    Delivered(SubmissionOutcome),
    /// Another send is still pending.
    InFlight,
    AlreadySubmitted,
    /// The form was disposed while the send was pending.
    Cancelled,
    Disposed,
}

impl SubmitAttempt {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitAttempt::Delivered(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldValue;

    fn filled(id: FieldId, value: FieldValue) -> FormField {
        let mut field = FormField::new(id, false);
        field.set_value(value);
        field
    }

    #[test]
    fn snapshot_trims_text_but_keeps_select_value() {
        let fields = vec![
            filled(FieldId::Name, " Kari Nordmann ".into()),
            filled(FieldId::Email, "kari@example.no ".into()),
            filled(FieldId::Phone, "234 56 789".into()),
            filled(FieldId::JobType, " solar ".into()),
            filled(FieldId::SiteVisit, true.into()),
        ];

        let request = SubmissionRequest::from_fields(&fields);
        assert_eq!(request.name, "Kari Nordmann");
        assert_eq!(request.email, "kari@example.no");
        assert_eq!(request.phone, "234 56 789");
        assert_eq!(request.address, "");
        assert_eq!(request.job_type, " solar ");
        assert!(request.site_visit);
    }

    #[test]
    fn wire_shape_uses_camel_case_keys() {
        let request = SubmissionRequest::from_fields(&[filled(FieldId::JobType, "el-bil".into())]);
        let json = request.to_json();
        assert_eq!(json["jobType"], "el-bil");
        assert_eq!(json["siteVisit"], false);
        assert_eq!(serde_json::to_value(&request).unwrap(), json);
    }
}
