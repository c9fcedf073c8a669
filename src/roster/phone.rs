//! Phone number normalization and display formatting.

/// Strip every non-digit character.
///
/// No length or country-code validation is performed; an empty or
/// digit-free input yields an empty string. Idempotent.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Hyphenate a digit string for display.
///
/// 11 digits render as 3-4-4 (mobile numbers), 10 digits as 3-3-4;
/// anything else is returned unchanged. Presentation only — the stored
/// digit string is never modified.
pub fn format_phone_for_display(digits: &str) -> String {
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return digits.to_string();
    }
    match digits.len() {
        11 => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
        10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => digits.to_string(),
    }
}
