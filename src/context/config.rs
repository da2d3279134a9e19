// src/context/config.rs

use crate::error::{FormError, Result};
use crate::model::FieldId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// User-facing validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub required: String,
    pub invalid_email: String,
    pub invalid_phone: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "Dette feltet er påkrevd".into(),
            invalid_email: "Vennligst oppgi en gyldig e-postadresse".into(),
            invalid_phone: "Vennligst oppgi et gyldig telefonnummer".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Latency of the simulated send.
    pub submit_delay_ms: u64,
    /// Label shown on the submit control while sending.
    pub sending_label: String,
    pub messages: Messages,
    /// Fields flagged required. Order is irrelevant; validation always runs
    /// in layout order.
    pub required: Vec<FieldId>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            sending_label: "Sender...".into(),
            messages: Messages::default(),
            required: vec![
                FieldId::Name,
                FieldId::Email,
                FieldId::Phone,
                FieldId::JobType,
                FieldId::Description,
            ],
        }
    }
}

impl FormConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FormError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn is_required(&self, field: FieldId) -> bool {
        self.required.contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_site_form() {
        let config = FormConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.sending_label, "Sender...");
        assert!(config.is_required(FieldId::Email));
        assert!(!config.is_required(FieldId::Address));
        assert!(!config.is_required(FieldId::SiteVisit));
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = FormConfig::from_json(
            r#"{ "submit_delay_ms": 200, "messages": { "required": "This field is required" } }"#,
        )
        .unwrap();

        assert_eq!(config.submit_delay_ms, 200);
        assert_eq!(config.messages.required, "This field is required");
        assert_eq!(config.messages.invalid_phone, Messages::default().invalid_phone);
        assert_eq!(config.required, FormConfig::default().required);
    }

    #[test]
    fn required_fields_use_element_ids() {
        let config = FormConfig::from_json(r#"{ "required": ["name", "jobType"] }"#).unwrap();
        assert_eq!(config.required, vec![FieldId::Name, FieldId::JobType]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = FormConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FormError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = FormConfig::load("/nonexistent/contact-form.json").unwrap_err();
        match err {
            FormError::ConfigIo { path, .. } => {
                assert!(path.ends_with("contact-form.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
