//! Char-limit spec parsing.
//!
//! Limit specs come from the "Char Count" column as free-form strings such
//! as `"<50"`, `"50"`, or `"—"`. The limit is the first run of ASCII digits
//! anywhere in the spec; a spec with no digits means unlimited.

/// Extract the integer character limit from a limit spec.
///
/// Returns `None` when the spec carries no digits (unlimited).
pub fn parse_char_limit(spec: &str) -> Option<u32> {
    let digits: String =
        spec.chars().skip_while(|c| !c.is_ascii_digit()).take_while(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() { None } else { digits.parse().ok() }
}
