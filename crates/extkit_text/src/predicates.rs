//! Boolean checks over strings.

use std::sync::OnceLock;

use regex::Regex;

static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Returns true if the trimmed input is a whole number that fits in `i64`.
#[must_use]
pub fn is_integer(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok()
}

/// Returns true if the trimmed input is a plain decimal literal such as
/// `-112.9` or `.5`. Exponents are not accepted.
#[must_use]
pub fn is_decimal(value: &str) -> bool {
    let regex = DECIMAL_REGEX
        .get_or_init(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)$").expect("Invalid regex"));
    regex.is_match(value.trim())
}

/// Returns true if the trimmed input parses as a finite `f64`.
#[must_use]
pub fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

/// Returns true if the input is non-empty and, ignoring spaces, made only of
/// letters.
#[must_use]
pub fn is_alpha(value: &str) -> bool {
    has_content(value) && value.chars().filter(|c| *c != ' ').all(char::is_alphabetic)
}

/// Returns true if the input is non-empty and, ignoring spaces, made only of
/// letters and digits.
#[must_use]
pub fn is_alphanumeric(value: &str) -> bool {
    has_content(value) && value.chars().filter(|c| *c != ' ').all(char::is_alphanumeric)
}

fn has_content(value: &str) -> bool {
    value.chars().any(|c| c != ' ')
}

/// Returns true if the input is empty or only whitespace.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns true if the input has at least `min` characters.
#[must_use]
pub fn is_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Returns true if the input has at most `max` characters.
#[must_use]
pub fn is_max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Returns true if the input length lies in `min..=max` characters.
#[must_use]
pub fn is_between_length(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.chars().count())
}

/// Returns true if the input equals one of `candidates`.
#[must_use]
pub fn is_in(value: &str, candidates: &[&str]) -> bool {
    candidates.contains(&value)
}

/// Returns true if the input equals one of `candidates`, ignoring case.
#[must_use]
pub fn is_in_ignore_case(value: &str, candidates: &[&str]) -> bool {
    let value = value.to_lowercase();
    candidates.iter().any(|candidate| candidate.to_lowercase() == value)
}
