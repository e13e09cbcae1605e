// File: src/validation/mod.rs
// Purpose: Ordered field rules and the validation outcome

pub mod validators;

use crate::form::{ContactForm, FieldName, InquiryType};

/// Status message shown when every rule passes
pub const SUCCESS_MESSAGE: &str = "no problems with the entered values.";

/// A single field that failed validation, and why
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldName,
    pub message: &'static str,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of one validation pass
///
/// At most one failing field is reported per pass: rules run in field order
/// and stop at the first violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Success,
    Failure(FieldError),
}

impl ValidationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Success)
    }

    /// The field that failed, if any
    pub fn failed_field(&self) -> Option<FieldName> {
        match self {
            ValidationOutcome::Success => None,
            ValidationOutcome::Failure(err) => Some(err.field),
        }
    }

    /// Label shown before the status message: the failing field's name, or
    /// "result" on success
    pub fn status_label(&self) -> &'static str {
        match self {
            ValidationOutcome::Success => "result",
            ValidationOutcome::Failure(err) => err.field.as_str(),
        }
    }

    /// Human-readable status message
    pub fn message(&self) -> &'static str {
        match self {
            ValidationOutcome::Success => SUCCESS_MESSAGE,
            ValidationOutcome::Failure(err) => err.message,
        }
    }
}

/// Validates the five fields in fixed order, stopping at the first violation.
///
/// Pure and total: no side effects, same outcome for same values. The empty
/// phonetic reading reports the katakana message (the predicate rejects the
/// empty string), matching the page's single message for that field.
pub fn validate(form: &ContactForm) -> ValidationOutcome {
    if form.name.is_empty() {
        return fail(FieldName::Name, "name is required");
    }
    if !validators::is_katakana(&form.phonetic_reading) {
        return fail(
            FieldName::PhoneticReading,
            "must be entered in full-width katakana",
        );
    }
    if form.email.is_empty() {
        return fail(FieldName::Email, "email is required");
    }
    if !validators::is_valid_email(&form.email) {
        return fail(FieldName::Email, "invalid email address");
    }
    if InquiryType::parse(&form.inquiry_type).is_none() {
        return fail(FieldName::InquiryType, "inquiry type not selected");
    }
    if form.message.is_empty() {
        return fail(FieldName::Message, "details are required");
    }
    ValidationOutcome::Success
}

fn fail(field: FieldName, message: &'static str) -> ValidationOutcome {
    ValidationOutcome::Failure(FieldError { field, message })
}
