//! Field-by-field validation for the registration form.
//!
//! The engine is pure and stateless: the UI layer owns the form state,
//! passes a context snapshot into every call, and decides when validation
//! triggers (blur, submit). Verdicts come back as message strings; an empty
//! message means the field passed. Nothing here throws across the public
//! boundary and nothing reads a clock.

pub mod age;
pub mod patterns;
pub mod rules;
pub mod taxid;

mod error;

pub use error::MalformedDateError;

use chrono::NaiveDate;
use form_types::{FieldName, FormData, ValidationErrors};
use tracing::debug;

use crate::age::AgeCalculator;

/// Snapshot of everything a rule may depend on besides the value itself.
///
/// Handed in explicitly on every call; the engine holds no memory between
/// invocations.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Whole-years age derived from the birth date field, when known.
    pub age: Option<i32>,
    /// Current values of every field, for cross-field rules.
    pub values: &'a FormData,
}

/// RegistrationValidator entry point
pub struct RegistrationValidator;

impl RegistrationValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a single field, typically on blur.
    ///
    /// The caller keeps `context.age` in step with the birth date field and
    /// stores the returned message under the field's key.
    pub fn validate_field(
        &self,
        field: FieldName,
        value: &str,
        context: &ValidationContext,
    ) -> String {
        let message = rules::evaluate(field, value, context);
        if !message.is_empty() {
            debug!(field = field.key(), %message, "field failed validation");
        }
        message
    }

    /// Full sweep over every field, typically on submit.
    ///
    /// Age is recomputed from the current birth date value before sweeping,
    /// so submit-time verdicts never act on a stale age. The returned map
    /// holds one entry per field; the form is submittable when it
    /// `is_clear()`.
    pub fn validate_form(&self, form: &FormData, today: NaiveDate) -> ValidationErrors {
        let age = AgeCalculator::derive(form.value(FieldName::BirthDate), today);
        let context = ValidationContext { age, values: form };

        let mut errors = ValidationErrors::new();
        for field in FieldName::ALL {
            errors.record(field, self.validate_field(field, form.value(field), &context));
        }

        debug!(
            submittable = errors.is_clear(),
            failed = errors.failed_fields().len(),
            "form sweep finished"
        );
        errors
    }
}

impl Default for RegistrationValidator {
    fn default() -> Self {
        Self::new()
    }
}
