// src/validation/field.rs

use crate::context::config::Messages;
use crate::model::{FieldId, FieldKind, FormField, Validity};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// Whitespace as browsers define it for form patterns. Unicode `\s` differs:
// it includes U+0085 and leaves out U+FEFF.
const WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[^{WHITESPACE}@]+@[^{WHITESPACE}@]+\.[^{WHITESPACE}@]+$"))
        .expect("email pattern compiles")
});

// Norwegian numbers: 8 ASCII digits, first digit 2-9, optional +47 prefix.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+47)?[2-9][0-9]{7}$").expect("phone pattern compiles"));

static PHONE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[{WHITESPACE}-]")).expect("separator pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    Required,
    InvalidEmail,
    InvalidPhone,
}

impl FieldError {
    pub fn message<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            FieldError::Required => &messages.required,
            FieldError::InvalidEmail => &messages.invalid_email,
            FieldError::InvalidPhone => &messages.invalid_phone,
        }
    }

    pub fn validity(&self) -> Validity {
        match self {
            FieldError::Required => Validity::InvalidEmpty,
            FieldError::InvalidEmail | FieldError::InvalidPhone => Validity::InvalidFormat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: FieldId,
    pub error: FieldError,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn normalize_phone(phone: &str) -> String {
    PHONE_SEPARATORS.replace_all(phone, "").into_owned()
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(&normalize_phone(phone))
}

/// Checks a single field. Emptiness wins over format checks.
pub fn check_field(field: &FormField) -> Option<FieldError> {
    if field.value.is_blank() {
        return Some(FieldError::Required);
    }

    let value = field.value.as_text();
    match field.id.kind() {
        FieldKind::Email if !is_valid_email(value) => Some(FieldError::InvalidEmail),
        FieldKind::Phone if !is_valid_phone(value) => Some(FieldError::InvalidPhone),
        _ => None,
    }
}

/// Validates every required field in layout order without short-circuiting,
/// so each problem is reported in one pass.
pub fn validate_fields(fields: &[FormField]) -> Vec<FieldIssue> {
    fields
        .iter()
        .filter(|field| field.required)
        .filter_map(|field| {
            check_field(field).map(|error| FieldIssue {
                field: field.id,
                error,
            })
        })
        .collect()
}
