// src/view/mod.rs

pub mod class_list;
pub mod memory;

pub use class_list::ClassList;
pub use memory::{Annotation, MemoryView};

use crate::context::FormConfig;
use crate::error::{FormError, Result};
use crate::model::{FieldId, FieldValue, FormField};

pub const FORM_ID: &str = "contact-form";
pub const SUCCESS_ID: &str = "form-success";
pub const SUBMIT_ID: &str = "submit";

/// Class toggled on invalid inputs.
pub const ERROR_CLASS: &str = "error";
/// Class of the annotation inserted after an invalid field.
pub const ANNOTATION_CLASS: &str = "form-error";

/// The element contract a form controller renders into.
pub trait FormView: Send {
    fn has_element(&self, id: &str) -> bool;
    fn field_value(&self, field: FieldId) -> FieldValue;

    /// Removes every `form-error` annotation and the `error` class from all
    /// inputs, selects and textareas.
    fn clear_errors(&mut self);
    fn show_field_error(&mut self, field: FieldId, message: &str);

    fn submit_label(&self) -> String;
    fn set_submit_control(&mut self, label: &str, disabled: bool);

    fn set_visible(&mut self, id: &str, visible: bool);
    fn scroll_into_view(&mut self, id: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldBinding {
    pub field: FieldId,
    pub required: bool,
}

/// Field accessors resolved once against a view.
#[derive(Clone, Debug)]
pub struct FormBindings {
    fields: Vec<FieldBinding>,
}

impl FormBindings {
    /// Fails on the first expected element the view does not have.
    pub fn resolve(view: &dyn FormView, config: &FormConfig) -> Result<Self> {
        for id in [FORM_ID, SUBMIT_ID, SUCCESS_ID] {
            if !view.has_element(id) {
                return Err(FormError::MissingElement(id.to_string()));
            }
        }

        let mut fields = Vec::with_capacity(FieldId::ALL.len());
        for field in FieldId::ALL {
            if !view.has_element(field.element_id()) {
                return Err(FormError::MissingElement(field.element_id().to_string()));
            }
            fields.push(FieldBinding {
                field,
                required: config.is_required(field),
            });
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldBinding] {
        &self.fields
    }

    pub fn required(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.iter().filter(|b| b.required).map(|b| b.field)
    }

    pub fn new_fields(&self) -> Vec<FormField> {
        self.fields
            .iter()
            .map(|binding| FormField::new(binding.field, binding.required))
            .collect()
    }

    /// Pulls current values from the view into the model.
    pub fn read_into(&self, view: &dyn FormView, fields: &mut [FormField]) {
        for field in fields.iter_mut() {
            field.set_value(view.field_value(field.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_field_with_required_flags() {
        let view = MemoryView::contact_form();
        let bindings = FormBindings::resolve(&view, &FormConfig::default()).unwrap();

        assert_eq!(bindings.fields().len(), FieldId::ALL.len());
        let required: Vec<_> = bindings.required().collect();
        assert_eq!(
            required,
            vec![
                FieldId::Name,
                FieldId::Email,
                FieldId::Phone,
                FieldId::JobType,
                FieldId::Description
            ]
        );
    }

    #[test]
    fn missing_field_fails_fast() {
        let view = MemoryView::contact_form().without("phone");
        let err = FormBindings::resolve(&view, &FormConfig::default()).unwrap_err();
        assert!(matches!(err, FormError::MissingElement(id) if id == "phone"));
    }

    #[test]
    fn missing_success_element_fails_fast() {
        let view = MemoryView::contact_form().without(SUCCESS_ID);
        let err = FormBindings::resolve(&view, &FormConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "element not found: #form-success");
    }
}
