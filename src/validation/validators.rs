// File: src/validation/validators.rs
// Purpose: Field-level predicates (no form knowledge)

use once_cell::sync::Lazy;
use regex::Regex;

// Email validation regex
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// Full-width katakana block, U+30A0..=U+30FF. Includes the prolonged sound
// mark (ー) and the middle dot (・). Rejects the empty string.
static KATAKANA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\u{30A0}-\u{30FF}]+$").unwrap());

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check that a string is non-empty and entirely full-width katakana
pub fn is_katakana(value: &str) -> bool {
    KATAKANA_REGEX.is_match(value)
}
