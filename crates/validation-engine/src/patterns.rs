//! Compiled patterns shared by the field rules.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Punctuated tax identifier surface form: NNN.NNN.NNN-NN.
    static ref PUNCTUATED_TAX_ID: Regex = Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").unwrap();

    /// Bare 11-digit tax identifier surface form.
    static ref BARE_TAX_ID: Regex = Regex::new(r"^\d{11}$").unwrap();
}

/// True when the raw value is written in one of the two accepted surface
/// forms. The tax-id rule checks this before consulting the check digits.
pub fn matches_tax_id_format(raw: &str) -> bool {
    PUNCTUATED_TAX_ID.is_match(raw) || BARE_TAX_ID.is_match(raw)
}
