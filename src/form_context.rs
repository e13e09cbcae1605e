// File: src/form_context.rs
// Purpose: Render-side context: submitted values plus the validation outcome

use crate::form::{ContactForm, FieldName};
use crate::validation::ValidationOutcome;

/// Context the page renders from
///
/// Carries the submitted values so inputs keep what the user typed, and the
/// outcome so the failing field can be flagged and the status line shown.
/// Overwritten wholesale on every submit; a fresh GET has neither.
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    values: ContactForm,
    outcome: Option<ValidationOutcome>,
}

impl FormContext {
    /// Context for a submitted form with its validation outcome
    pub fn new(values: ContactForm, outcome: ValidationOutcome) -> Self {
        Self {
            values,
            outcome: Some(outcome),
        }
    }

    /// Context for the initial, unsubmitted page
    pub fn empty() -> Self {
        Self::default()
    }

    /// Value to re-render into a field's control
    pub fn value(&self, field: FieldName) -> &str {
        self.values.value(field)
    }

    /// Whether this field is the one flagged by the outcome
    pub fn has_error(&self, field: FieldName) -> bool {
        self.outcome.as_ref().and_then(|o| o.failed_field()) == Some(field)
    }

    /// Status line as (label, message), None before the first submit
    pub fn status(&self) -> Option<(&'static str, &'static str)> {
        self.outcome
            .as_ref()
            .map(|o| (o.status_label(), o.message()))
    }
}
