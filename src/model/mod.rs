// src/model/mod.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of the contact form, in the order they appear in the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Address,
    JobType,
    Description,
    SiteVisit,
}

impl FieldId {
    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::JobType,
        FieldId::Description,
        FieldId::SiteVisit,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Address => "address",
            FieldId::JobType => "jobType",
            FieldId::Description => "description",
            FieldId::SiteVisit => "siteVisit",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.element_id() == id)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Name | FieldId::Address => FieldKind::Text,
            FieldId::Email => FieldKind::Email,
            FieldId::Phone => FieldKind::Phone,
            FieldId::JobType => FieldKind::Select,
            FieldId::Description => FieldKind::TextArea,
            FieldId::SiteVisit => FieldKind::Checkbox,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Select,
    TextArea,
    Checkbox,
}

impl FieldKind {
    /// Style class carried by the input element. Only inputs, selects and
    /// textareas take the `error` class.
    pub fn style_class(self) -> Option<&'static str> {
        match self {
            FieldKind::Text | FieldKind::Email | FieldKind::Phone => Some("form-input"),
            FieldKind::Select => Some("form-select"),
            FieldKind::TextArea => Some("form-textarea"),
            FieldKind::Checkbox => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn empty_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Checkbox => FieldValue::Flag(false),
            _ => FieldValue::Text(String::new()),
        }
    }

    /// A checkbox always carries a non-empty value attribute, so flags never
    /// count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Flag(_) => false,
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Valid,
    InvalidEmpty,
    InvalidFormat,
}

#[derive(Clone, Debug)]
pub struct FormField {
    pub id: FieldId,
    pub value: FieldValue,
    pub required: bool,
    pub validity: Validity,
    pub error: Option<String>,
}

impl FormField {
    pub fn new(id: FieldId, required: bool) -> Self {
        Self {
            id,
            value: FieldValue::empty_for(id.kind()),
            required,
            validity: Validity::Valid,
            error: None,
        }
    }

    pub fn set_value(&mut self, value: FieldValue) {
        self.value = value;
    }

    pub fn mark_valid(&mut self) {
        self.validity = Validity::Valid;
        self.error = None;
    }

    pub fn mark_invalid(&mut self, validity: Validity, message: &str) {
        self.validity = validity;
        self.error = Some(message.to_string());
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_resolve_back_to_fields() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_element_id(field.element_id()), Some(field));
        }
        assert_eq!(FieldId::from_element_id("fax"), None);
    }

    #[test]
    fn whitespace_only_text_is_blank_but_flags_never_are() {
        assert!(FieldValue::from("   \t").is_blank());
        assert!(!FieldValue::from(" x ").is_blank());
        assert!(!FieldValue::Flag(false).is_blank());
    }

    #[test]
    fn serde_uses_element_ids() {
        let encoded = serde_json::to_string(&FieldId::JobType).unwrap();
        assert_eq!(encoded, "\"jobType\"");
        let decoded: FieldId = serde_json::from_str("\"siteVisit\"").unwrap();
        assert_eq!(decoded, FieldId::SiteVisit);
    }
}
