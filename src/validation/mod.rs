// src/validation/mod.rs

pub mod field;

pub use field::{
    FieldError, FieldIssue, check_field, is_valid_email, is_valid_phone, normalize_phone,
    validate_fields,
};
