//! The registration form.
//!
//! [`FormPort`] is what the controller needs from a form: read and write the
//! four inputs, show and clear per-field errors, switch the submit button.
//! [`FormModel`] is an in-memory form used by the terminal host and by tests.

use crate::record::{Field, StudentRecord};
use crate::validation::FieldError;

/// Which operation a submit performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submit appends a new record.
    #[default]
    Create,
    /// Submit replaces the record at this index.
    Edit(usize),
}

impl FormMode {
    /// The index being edited, if any.
    #[must_use]
    pub fn edit_index(self) -> Option<usize> {
        match self {
            Self::Create => None,
            Self::Edit(index) => Some(index),
        }
    }
}

/// Appearance of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitButton {
    /// Create mode.
    #[default]
    Add,
    /// Edit mode.
    Update,
}

impl SubmitButton {
    /// The button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Student",
            Self::Update => "Update Student",
        }
    }

    /// Whether the `editing` style is applied.
    #[must_use]
    pub fn is_editing(self) -> bool {
        matches!(self, Self::Update)
    }
}

/// The form part of the display.
pub trait FormPort {
    /// Current raw text of an input.
    fn value(&self, field: Field) -> String;

    /// Replace the text of an input.
    fn set_value(&mut self, field: Field, value: &str);

    /// Empty every input.
    fn clear_values(&mut self);

    /// Mark the error's field and show its message.
    fn show_error(&mut self, error: &FieldError);

    /// Remove the error indicator of a field.
    fn clear_error(&mut self, field: Field);

    /// Switch the submit button.
    fn set_submit_button(&mut self, button: SubmitButton);

    /// Bring the form into view.
    fn scroll_into_view(&mut self) {}

    /// Move input focus to a field.
    fn focus(&mut self, _field: Field) {}
}

/// In-memory form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    values: [String; 4],
    errors: [Option<FieldError>; 4],
    submit_button: SubmitButton,
    focused: Option<Field>,
    scroll_requests: usize,
}

impl FormModel {
    /// An empty form in create mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The error currently shown on a field.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors[field.index()].as_ref()
    }

    /// All shown errors, in form order.
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().flatten()
    }

    /// The submit button state.
    #[must_use]
    pub fn submit_button(&self) -> SubmitButton {
        self.submit_button
    }

    /// The focused field, if focus was moved.
    #[must_use]
    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    /// How many times the form was scrolled into view.
    #[must_use]
    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    /// The inputs as a (trimmed) record.
    #[must_use]
    pub fn to_record(&self) -> StudentRecord {
        StudentRecord::from_fields(|field| self.value(field))
    }
}

impl FormPort for FormModel {
    fn value(&self, field: Field) -> String {
        self.values[field.index()].clone()
    }

    fn set_value(&mut self, field: Field, value: &str) {
        self.values[field.index()] = value.to_string();
    }

    fn clear_values(&mut self) {
        self.values = Default::default();
    }

    fn show_error(&mut self, error: &FieldError) {
        self.errors[error.field.index()] = Some(*error);
    }

    fn clear_error(&mut self, field: Field) {
        self.errors[field.index()] = None;
    }

    fn set_submit_button(&mut self, button: SubmitButton) {
        self.submit_button = button;
    }

    fn scroll_into_view(&mut self) {
        self.scroll_requests += 1;
    }

    fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }
}
