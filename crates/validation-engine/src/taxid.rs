//! Tax identifier check-digit verification.
//!
//! The identifier is 11 digits in the Brazilian CPF scheme: nine base digits
//! followed by two mod-11 check digits, each computed over everything that
//! precedes it.

/// Verify the two check digits of an 11-digit tax identifier.
///
/// Punctuation and any other non-digit characters are ignored here; the
/// accepted surface formats are gated separately by the tax-id field rule.
/// Malformed input yields `false` rather than an error.
pub fn is_valid_tax_id(raw: &str) -> bool {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return false;
    }

    // Repeated sequences like 111.111.111-11 satisfy the checksum but are
    // never issued.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Mod-11 check digit over a digit prefix.
///
/// Weights run from `len + 1` down to 2 across the prefix (10..=2 for the
/// first check digit, 11..=2 for the second). The digit is `(sum * 10) % 11`,
/// with 10 and 11 collapsed to 0.
fn check_digit(prefix: &[u32]) -> u32 {
    let len = prefix.len() as u32;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &digit)| digit * (len + 1 - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 | 11 => 0,
        rest => rest,
    }
}


// ============================================================================
// PROPERTY TESTS - Check-digit sensitivity
// ============================================================================
