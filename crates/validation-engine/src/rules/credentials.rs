//! Credential rules: password strength and confirmation.

use form_types::FieldName;

/// Passwords shorter than the minimum are rejected. Length is measured in
/// characters, not bytes.
pub fn check_min_length(field: FieldName, value: &str, min: usize) -> String {
    if value.chars().count() < min {
        return format!("{} must be at least {} characters long.", field.label(), min);
    }
    String::new()
}

/// The confirmation must equal the password as it currently stands. The
/// caller hands in the latest password value, never a snapshot.
pub fn check_confirmation(value: &str, password: &str) -> String {
    if value != password {
        return "Passwords do not match.".to_string();
    }
    String::new()
}
