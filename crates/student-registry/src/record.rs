//! Student record types.
//!
//! A [`StudentRecord`] is the four-field tuple held in the registry list. A
//! record has no identity of its own: it is addressed by its position in the
//! list.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the four form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// The student's name.
    Name,
    /// The numeric student identifier.
    StudentId,
    /// The email address.
    Email,
    /// The numeric contact number.
    Contact,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::StudentId, Field::Email, Field::Contact];

    /// The element id of the field's input.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::StudentId => "studentId",
            Self::Email => "email",
            Self::Contact => "contact",
        }
    }

    /// The element id of the field's error indicator (`<fieldId>-error`).
    #[must_use]
    pub fn error_id(self) -> String {
        format!("{}-error", self.id())
    }

    /// The column label used for the field in the records table.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::StudentId => "Student ID",
            Self::Email => "Email",
            Self::Contact => "Contact No.",
        }
    }

    /// Position of the field in [`Field::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Field {
    type Err = Error;

    /// Accepts the element id in any case, with or without `-`/`_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "name" => Ok(Self::Name),
            "studentid" | "id" => Ok(Self::StudentId),
            "email" => Ok(Self::Email),
            "contact" => Ok(Self::Contact),
            _ => Err(Error::UnknownField {
                name: s.to_string(),
            }),
        }
    }
}

/// A single student's record.
///
/// Serialized as a flat mapping with the keys `name`, `studentId`, `email`
/// and `contact`, all strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Student name.
    pub name: String,
    /// Student identifier, digits only.
    pub student_id: String,
    /// Email address.
    pub email: String,
    /// Contact number, at least ten digits.
    pub contact: String,
}

impl StudentRecord {
    /// Create a record from its four values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        student_id: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }

    /// Build a record by reading each field from `value` and trimming it.
    pub fn from_fields(mut value: impl FnMut(Field) -> String) -> Self {
        let mut read = |field| value(field).trim().to_string();
        Self {
            name: read(Field::Name),
            student_id: read(Field::StudentId),
            email: read(Field::Email),
            contact: read(Field::Contact),
        }
    }

    /// The value of one field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::StudentId => &self.student_id,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
        }
    }
}
