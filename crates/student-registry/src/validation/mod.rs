//! Field validation.
//!
//! The four predicates take an already trimmed value and never have side
//! effects. Emptiness is checked separately by [`check_submitted`] so that a
//! missing value gets its own "required" message; a field fails for one reason
//! at a time, and "required" wins.
//!
//! # Example
//!
//! ```
//! use student_registry::record::Field;
//! use student_registry::validation::{check_submitted, is_valid_email, FieldErrorKind};
//!
//! assert!(is_valid_email("a@b.c"));
//! assert!(!is_valid_email("a@b"));
//!
//! let err = check_submitted(Field::Name, "").unwrap_err();
//! assert_eq!(err.kind, FieldErrorKind::Required);
//! assert_eq!(err.message(), "Student name is required");
//! ```

mod patterns;

pub use patterns::{pattern_for, FieldPattern};

use crate::record::{Field, StudentRecord};

/// Minimum trimmed length of a name.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum number of digits in a contact number.
pub const MIN_CONTACT_LEN: usize = 10;

/// Letters and whitespace only, at least two characters after trimming.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    pattern_for(Field::Name).matches(name) && name.trim().chars().count() >= MIN_NAME_LEN
}

/// Digits only, non-empty.
#[must_use]
pub fn is_valid_student_id(id: &str) -> bool {
    pattern_for(Field::StudentId).matches(id) && !id.trim().is_empty()
}

/// `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    pattern_for(Field::Email).matches(email)
}

/// Digits only, at least ten of them.
#[must_use]
pub fn is_valid_contact(contact: &str) -> bool {
    pattern_for(Field::Contact).matches(contact) && contact.len() >= MIN_CONTACT_LEN
}

/// Run the pattern predicate for `field`.
#[must_use]
pub fn is_valid(field: Field, value: &str) -> bool {
    match field {
        Field::Name => is_valid_name(value),
        Field::StudentId => is_valid_student_id(value),
        Field::Email => is_valid_email(value),
        Field::Contact => is_valid_contact(value),
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// The value was empty after trimming.
    Required,
    /// The value did not match the field's pattern.
    Invalid,
}

/// A user input error on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldError {
    /// The rejected field.
    pub field: Field,
    /// The reason.
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// A "required" error for `field`.
    #[must_use]
    pub fn required(field: Field) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Required,
        }
    }

    /// A pattern mismatch error for `field`.
    #[must_use]
    pub fn invalid(field: Field) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Invalid,
        }
    }

    /// The message shown next to the field.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match (self.field, self.kind) {
            (Field::Name, FieldErrorKind::Required) => "Student name is required",
            (Field::Name, FieldErrorKind::Invalid) => "Name must contain only letters and spaces",
            (Field::StudentId, FieldErrorKind::Required) => "Student ID is required",
            (Field::StudentId, FieldErrorKind::Invalid) => "Student ID must contain only numbers",
            (Field::Email, FieldErrorKind::Required) => "Email is required",
            (Field::Email, FieldErrorKind::Invalid) => "Please enter a valid email address",
            (Field::Contact, FieldErrorKind::Required) => "Contact number is required",
            (Field::Contact, FieldErrorKind::Invalid) => "Contact must be 10+ digits",
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Submit-time check of one trimmed value: required first, then pattern.
///
/// # Errors
///
/// Returns the field error when the value is empty or does not match.
pub fn check_submitted(field: Field, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::required(field))
    } else if !is_valid(field, value) {
        Err(FieldError::invalid(field))
    } else {
        Ok(())
    }
}

/// Focus-loss check of one raw value: pattern only, empty values pass.
#[must_use]
pub fn check_on_blur(field: Field, raw: &str) -> Option<FieldError> {
    let value = raw.trim();
    if !value.is_empty() && !is_valid(field, value) {
        Some(FieldError::invalid(field))
    } else {
        None
    }
}

/// Check all four fields of a trimmed record independently.
///
/// Returns one error per failing field, in form order; empty when the record
/// may enter the list.
#[must_use]
pub fn validate_record(record: &StudentRecord) -> Vec<FieldError> {
    Field::ALL
        .iter()
        .filter_map(|&field| check_submitted(field, record.get(field)).err())
        .collect()
}
