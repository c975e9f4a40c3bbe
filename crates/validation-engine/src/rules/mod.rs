//! Per-field validation rules.
//!
//! Each field maps to at most one rule, looked up in a data table, so adding
//! or removing a rule is a change to [`rule_for`] rather than to the
//! evaluation logic. Rules are pure: a verdict depends only on the value and
//! the supplied context, and evaluating the same inputs twice yields the
//! same message.

pub mod credentials;
pub mod identity;

use form_types::FieldName;

use crate::ValidationContext;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Age below which the guardian-name fields become required.
pub const AGE_OF_MAJORITY: i32 = 18;

/// The validation strategy attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain at least two whitespace-separated names.
    FullName,
    /// Value must match an accepted surface format and pass check-digit
    /// verification; the two failures carry distinct messages.
    TaxId,
    /// Value must be non-empty when the registrant is under 18.
    RequiredForMinor,
    /// Value must be at least this many characters long.
    MinLength(usize),
    /// Value must equal the current value of another field.
    MustMatch(FieldName),
    /// No rule; the field is always valid.
    Unchecked,
}

/// Rule table for the registration form.
pub fn rule_for(field: FieldName) -> Rule {
    match field {
        FieldName::FullName => Rule::FullName,
        FieldName::TaxId => Rule::TaxId,
        FieldName::FatherName | FieldName::MotherName => Rule::RequiredForMinor,
        FieldName::Password => Rule::MinLength(MIN_PASSWORD_LEN),
        FieldName::ConfirmPassword => Rule::MustMatch(FieldName::Password),
        _ => Rule::Unchecked,
    }
}

/// Evaluate the rule for `field` against `value`. Empty return = pass.
pub fn evaluate(field: FieldName, value: &str, context: &ValidationContext) -> String {
    match rule_for(field) {
        Rule::FullName => identity::check_full_name(value),
        Rule::TaxId => identity::check_tax_id(value),
        Rule::RequiredForMinor => identity::check_required_for_minor(field, value, context.age),
        Rule::MinLength(min) => credentials::check_min_length(field, value, min),
        Rule::MustMatch(other) => {
            credentials::check_confirmation(value, context.values.value(other))
        }
        Rule::Unchecked => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_types::FormData;
    use pretty_assertions::assert_eq;

    fn context(values: &FormData, age: Option<i32>) -> ValidationContext {
        ValidationContext { age, values }
    }

    #[test]
    fn test_rule_table_assignments() {
        assert_eq!(rule_for(FieldName::FullName), Rule::FullName);
        assert_eq!(rule_for(FieldName::TaxId), Rule::TaxId);
        assert_eq!(rule_for(FieldName::FatherName), Rule::RequiredForMinor);
        assert_eq!(rule_for(FieldName::MotherName), Rule::RequiredForMinor);
        assert_eq!(rule_for(FieldName::Password), Rule::MinLength(8));
        assert_eq!(
            rule_for(FieldName::ConfirmPassword),
            Rule::MustMatch(FieldName::Password)
        );
        assert_eq!(rule_for(FieldName::Email), Rule::Unchecked);
    }

    #[test]
    fn test_guardian_verdicts_across_ages() {
        let form = FormData::new();

        assert!(!evaluate(FieldName::FatherName, "", &context(&form, Some(17))).is_empty());
        assert_eq!(evaluate(FieldName::FatherName, "", &context(&form, Some(18))), "");
        assert_eq!(evaluate(FieldName::FatherName, "", &context(&form, None)), "");
    }

    #[test]
    fn test_confirmation_reads_current_password() {
        let mut form = FormData::new();
        form.set(FieldName::Password, "abcdefgh");

        let verdict = evaluate(FieldName::ConfirmPassword, "abcdefgh", &context(&form, None));
        assert_eq!(verdict, "");

        // The password changed since the confirmation was typed; the same
        // confirmation value must now fail.
        form.set(FieldName::Password, "12345678");
        let verdict = evaluate(FieldName::ConfirmPassword, "abcdefgh", &context(&form, None));
        assert_eq!(verdict, "Passwords do not match.");
    }

    #[test]
    fn test_unruled_fields_always_pass() {
        let form = FormData::new();
        let ctx = context(&form, Some(17));

        for field in [
            FieldName::BirthDate,
            FieldName::Landline,
            FieldName::Mobile,
            FieldName::PostalCode,
            FieldName::Street,
            FieldName::Number,
            FieldName::Complement,
            FieldName::City,
            FieldName::State,
            FieldName::Email,
        ] {
            assert_eq!(evaluate(field, "anything at all", &ctx), "");
            assert_eq!(evaluate(field, "", &ctx), "");
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut form = FormData::new();
        form.set(FieldName::Password, "abcdefgh");
        let ctx = context(&form, Some(17));

        for field in FieldName::ALL {
            let first = evaluate(field, "x", &ctx);
            let second = evaluate(field, "x", &ctx);
            assert_eq!(first, second);
        }
    }
}
