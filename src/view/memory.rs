// src/view/memory.rs

use crate::model::{FieldId, FieldValue};
use crate::view::{ANNOTATION_CLASS, ClassList, ERROR_CLASS, FORM_ID, FormView, SUBMIT_ID, SUCCESS_ID};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub after: FieldId,
    pub class: &'static str,
    pub text: String,
}

#[derive(Clone, Debug)]
struct Element {
    classes: ClassList,
    visible: bool,
}

#[derive(Debug, Default)]
struct Document {
    elements: BTreeMap<String, Element>,
    values: HashMap<FieldId, FieldValue>,
    annotations: Vec<Annotation>,
    submit_label: String,
    submit_disabled: bool,
    scrolled_into_view: Vec<String>,
}

/// In-memory element tree for the contact form. Clones share the same
/// document, so one handle can drive a controller while another inspects it.
#[derive(Clone, Debug, Default)]
pub struct MemoryView {
    document: Arc<Mutex<Document>>,
}

impl MemoryView {
    pub fn contact_form() -> Self {
        let mut document = Document {
            submit_label: "Send forespørsel".into(),
            ..Document::default()
        };

        document.elements.insert(FORM_ID.into(), Element::shown(ClassList::new().with("contact-form")));
        document.elements.insert(SUBMIT_ID.into(), Element::shown(ClassList::new().with("btn")));
        document.elements.insert(
            SUCCESS_ID.into(),
            Element {
                classes: ClassList::new().with("form-success"),
                visible: false,
            },
        );

        for field in FieldId::ALL {
            let classes = match field.kind().style_class() {
                Some(class) => ClassList::new().with(class),
                None => ClassList::new(),
            };
            document.elements.insert(field.element_id().into(), Element::shown(classes));
            document.values.insert(field, FieldValue::empty_for(field.kind()));
        }

        Self {
            document: Arc::new(Mutex::new(document)),
        }
    }

    pub fn without(self, id: &str) -> Self {
        self.document.lock().elements.remove(id);
        self
    }

    pub fn set_value(&self, field: FieldId, value: impl Into<FieldValue>) {
        self.document.lock().values.insert(field, value.into());
    }

    pub fn annotations(&self) -> Vec<Annotation> {
        self.document.lock().annotations.clone()
    }

    pub fn errors_for(&self, field: FieldId) -> Vec<String> {
        self.document
            .lock()
            .annotations
            .iter()
            .filter(|annotation| annotation.after == field)
            .map(|annotation| annotation.text.clone())
            .collect()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.document
            .lock()
            .elements
            .get(id)
            .is_some_and(|element| element.classes.contains(class))
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.document
            .lock()
            .elements
            .get(id)
            .is_some_and(|element| element.visible)
    }

    /// Current label and disabled state of the submit control.
    pub fn submit_control(&self) -> (String, bool) {
        let document = self.document.lock();
        (document.submit_label.clone(), document.submit_disabled)
    }

    pub fn scrolled_into_view(&self) -> Vec<String> {
        self.document.lock().scrolled_into_view.clone()
    }
}

impl Element {
    fn shown(classes: ClassList) -> Self {
        Self {
            classes,
            visible: true,
        }
    }
}

impl FormView for MemoryView {
    fn has_element(&self, id: &str) -> bool {
        self.document.lock().elements.contains_key(id)
    }

    fn field_value(&self, field: FieldId) -> FieldValue {
        self.document
            .lock()
            .values
            .get(&field)
            .cloned()
            .unwrap_or_else(|| FieldValue::empty_for(field.kind()))
    }

    fn clear_errors(&mut self) {
        let mut document = self.document.lock();
        document
            .annotations
            .retain(|annotation| annotation.class != ANNOTATION_CLASS);

        for field in FieldId::ALL {
            if field.kind().style_class().is_none() {
                continue;
            }
            if let Some(element) = document.elements.get_mut(field.element_id()) {
                element.classes.remove(ERROR_CLASS);
            }
        }
    }

    fn show_field_error(&mut self, field: FieldId, message: &str) {
        let mut document = self.document.lock();
        if let Some(element) = document.elements.get_mut(field.element_id()) {
            element.classes.add(ERROR_CLASS);
        }

        // keep annotations in layout order, right behind their field
        let position = document
            .annotations
            .iter()
            .position(|annotation| annotation.after > field)
            .unwrap_or(document.annotations.len());
        document.annotations.insert(
            position,
            Annotation {
                after: field,
                class: ANNOTATION_CLASS,
                text: message.to_string(),
            },
        );
    }

    fn submit_label(&self) -> String {
        self.document.lock().submit_label.clone()
    }

    fn set_submit_control(&mut self, label: &str, disabled: bool) {
        let mut document = self.document.lock();
        document.submit_label = label.to_string();
        document.submit_disabled = disabled;
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(element) = self.document.lock().elements.get_mut(id) {
            element.visible = visible;
        }
    }

    fn scroll_into_view(&mut self, id: &str) {
        self.document.lock().scrolled_into_view.push(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_form_shown_and_success_hidden() {
        let view = MemoryView::contact_form();
        assert!(view.is_visible(FORM_ID));
        assert!(!view.is_visible(SUCCESS_ID));
        assert!(view.has_class("jobType", "form-select"));
        assert_eq!(view.submit_control(), ("Send forespørsel".to_string(), false));
    }

    #[test]
    fn annotations_stay_in_layout_order() {
        let mut view = MemoryView::contact_form();
        view.show_field_error(FieldId::Phone, "phone");
        view.show_field_error(FieldId::Name, "name");

        let order: Vec<_> = view.annotations().into_iter().map(|a| a.after).collect();
        assert_eq!(order, vec![FieldId::Name, FieldId::Phone]);
        assert!(view.has_class("phone", ERROR_CLASS));
    }

    #[test]
    fn clear_errors_removes_annotations_and_classes() {
        let mut view = MemoryView::contact_form();
        view.show_field_error(FieldId::Email, "bad");
        view.clear_errors();

        assert!(view.annotations().is_empty());
        assert!(!view.has_class("email", ERROR_CLASS));
        assert!(view.has_class("email", "form-input"));
    }

    #[test]
    fn clones_share_the_document() {
        let view = MemoryView::contact_form();
        let mut handle = view.clone();
        handle.set_visible(FORM_ID, false);
        assert!(!view.is_visible(FORM_ID));
    }
}
