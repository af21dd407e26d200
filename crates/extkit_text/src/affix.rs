//! Prefix and suffix handling.
//!
//! Case-insensitive variants compare Unicode lowercase forms, so they work
//! for non-ASCII text as well.

/// Returns true if `value` starts with `prefix`, ignoring case.
#[must_use]
pub fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    strip_prefix_ignore_case(value, prefix).is_some()
}

/// Returns true if `value` ends with `suffix`, ignoring case.
#[must_use]
pub fn ends_with_ignore_case(value: &str, suffix: &str) -> bool {
    strip_suffix_ignore_case(value, suffix).is_some()
}

/// Strips `prefix` ignoring case, returning the rest of `value`.
fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = value.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = rest.next()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
    }
    Some(rest.as_str())
}

/// Strips `suffix` ignoring case, returning the start of `value`.
fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let mut rest = value.char_indices();
    for expected in suffix.chars().rev() {
        let (_, actual) = rest.next_back()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
    }
    Some(rest.as_str())
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn strip_prefix<'a>(value: &'a str, prefix: &str, ignore_case: bool) -> Option<&'a str> {
    if ignore_case {
        strip_prefix_ignore_case(value, prefix)
    } else {
        value.strip_prefix(prefix)
    }
}

fn strip_suffix<'a>(value: &'a str, suffix: &str, ignore_case: bool) -> Option<&'a str> {
    if ignore_case {
        strip_suffix_ignore_case(value, suffix)
    } else {
        value.strip_suffix(suffix)
    }
}

/// Removes `prefix` from the start of `value` if present.
#[must_use]
pub fn remove_prefix<'a>(value: &'a str, prefix: &str, ignore_case: bool) -> &'a str {
    strip_prefix(value, prefix, ignore_case).unwrap_or(value)
}

/// Removes `suffix` from the end of `value` if present.
#[must_use]
pub fn remove_suffix<'a>(value: &'a str, suffix: &str, ignore_case: bool) -> &'a str {
    strip_suffix(value, suffix, ignore_case).unwrap_or(value)
}

/// Prepends `prefix` unless `value` already starts with it.
///
/// Empty values are returned unchanged.
#[must_use]
pub fn append_prefix_if_missing(value: &str, prefix: &str, ignore_case: bool) -> String {
    if value.is_empty() || strip_prefix(value, prefix, ignore_case).is_some() {
        value.to_string()
    } else {
        format!("{prefix}{value}")
    }
}

/// Appends `suffix` unless `value` already ends with it.
///
/// Empty values are returned unchanged.
#[must_use]
pub fn append_suffix_if_missing(value: &str, suffix: &str, ignore_case: bool) -> String {
    if value.is_empty() || strip_suffix(value, suffix, ignore_case).is_some() {
        value.to_string()
    } else {
        format!("{value}{suffix}")
    }
}

/// Returns true unless `value` starts with `prefix`.
#[must_use]
pub fn does_not_start_with(value: &str, prefix: &str, ignore_case: bool) -> bool {
    strip_prefix(value, prefix, ignore_case).is_none()
}

/// Returns true unless `value` ends with `suffix`.
#[must_use]
pub fn does_not_end_with(value: &str, suffix: &str, ignore_case: bool) -> bool {
    strip_suffix(value, suffix, ignore_case).is_none()
}
