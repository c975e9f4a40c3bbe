//! Identity rules: full name, tax identifier, guardian names for minors.

use form_types::FieldName;

use crate::patterns;
use crate::rules::AGE_OF_MAJORITY;
use crate::taxid;

/// A full name needs at least two whitespace-separated names.
pub fn check_full_name(value: &str) -> String {
    if value.split_whitespace().count() < 2 {
        return "Full name must contain at least two names.".to_string();
    }
    String::new()
}

/// The tax identifier must be written in an accepted surface format before
/// its check digits are looked at. The two failures produce distinct
/// messages so the UI can say which stage rejected the value.
pub fn check_tax_id(value: &str) -> String {
    if !patterns::matches_tax_id_format(value) {
        return "Invalid tax ID. Use the format XXX.XXX.XXX-XX or 11 digits.".to_string();
    }
    if !taxid::is_valid_tax_id(value) {
        return "Invalid tax ID. Check digit verification failed.".to_string();
    }
    String::new()
}

/// Guardian names are required only when the registrant is known to be a
/// minor. Unknown age applies no rule at all.
pub fn check_required_for_minor(field: FieldName, value: &str, age: Option<i32>) -> String {
    match age {
        Some(age) if age < AGE_OF_MAJORITY && value.trim().is_empty() => {
            format!("{} is required for minors under 18.", field.label())
        }
        _ => String::new(),
    }
}
