//! Compiled field patterns.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::Field;

/// A compiled validation pattern for one form field.
#[derive(Debug)]
pub struct FieldPattern {
    /// Name of the pattern for identification.
    pub name: &'static str,

    /// Description of what this pattern accepts.
    pub description: &'static str,

    regex: Regex,
}

impl FieldPattern {
    /// Create a new field pattern.
    ///
    /// # Panics
    ///
    /// Panics if the regex pattern is invalid.
    #[must_use]
    pub fn new(name: &'static str, description: &'static str, pattern: &str) -> Self {
        Self {
            name,
            description,
            regex: Regex::new(pattern).expect("Invalid regex pattern"),
        }
    }

    /// Check if the whole value matches this pattern.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The source of the underlying regex.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

// Digits are spelled `[0-9]`: `\d` in the regex crate also matches non-ASCII digits.
static NAME: Lazy<FieldPattern> = Lazy::new(|| {
    FieldPattern::new("name", "ASCII letters and whitespace", r"^[A-Za-z\s]+$")
});

static STUDENT_ID: Lazy<FieldPattern> =
    Lazy::new(|| FieldPattern::new("student_id", "ASCII digits", r"^[0-9]+$"));

static EMAIL: Lazy<FieldPattern> = Lazy::new(|| {
    FieldPattern::new(
        "email",
        "local@domain.tld with no whitespace or extra @",
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
    )
});

static CONTACT: Lazy<FieldPattern> =
    Lazy::new(|| FieldPattern::new("contact", "ASCII digits", r"^[0-9]+$"));

/// The pattern a field's value must match.
#[must_use]
pub fn pattern_for(field: Field) -> &'static FieldPattern {
    match field {
        Field::Name => &*NAME,
        Field::StudentId => &*STUDENT_ID,
        Field::Email => &*EMAIL,
        Field::Contact => &*CONTACT,
    }
}
