//! Slicing, counting and removal.

use extkit_foundation::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Returns the first character, if any.
#[must_use]
pub fn first_char(value: &str) -> Option<char> {
    value.chars().next()
}

/// Returns the last character, if any.
#[must_use]
pub fn last_char(value: &str) -> Option<char> {
    value.chars().next_back()
}

/// Returns the byte offset of the `n`-th character, or the length when `n`
/// equals the character count.
fn char_offset(value: &str, n: usize) -> Option<usize> {
    value
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(value.len()))
        .nth(n)
}

fn check_length(value: &str, length: usize, operation: &'static str) -> Result<usize> {
    if value.is_empty() {
        return Err(Error::missing_input("value").in_operation(operation));
    }
    let count = value.chars().count();
    if length > count {
        return Err(Error::out_of_range(
            "length",
            i64::try_from(length).unwrap_or(i64::MAX),
            0,
            i64::try_from(count).unwrap_or(i64::MAX),
        )
        .in_operation(operation));
    }
    Ok(count)
}

/// Returns the leftmost `length` characters.
///
/// # Errors
///
/// Returns a missing input error for an empty `value`, and an out of range
/// error when `length` exceeds its character count.
pub fn left(value: &str, length: usize) -> Result<&str> {
    check_length(value, length, "left")?;
    let end = char_offset(value, length).unwrap_or(value.len());
    Ok(&value[..end])
}

/// Returns the rightmost `length` characters.
///
/// # Errors
///
/// Same as [`left`].
pub fn right(value: &str, length: usize) -> Result<&str> {
    let count = check_length(value, length, "right")?;
    let start = char_offset(value, count - length).unwrap_or(0);
    Ok(&value[start..])
}

/// Returns at most the first `max_length` characters.
#[must_use]
pub fn truncate(value: &str, max_length: usize) -> &str {
    let end = char_offset(value, max_length).unwrap_or(value.len());
    &value[..end]
}

/// Reverses the characters.
#[must_use]
pub fn reverse(value: &str) -> String {
    value.chars().rev().collect()
}

/// Counts non-overlapping occurrences of `needle`. An empty needle counts as
/// zero.
#[must_use]
pub fn count_occurrences(value: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    value.matches(needle).count()
}

/// Counts non-overlapping occurrences of `needle`, ignoring case.
///
/// # Errors
///
/// Returns an invalid argument error if the needle is too large to compile
/// into a matcher.
pub fn count_occurrences_ignore_case(value: &str, needle: &str) -> Result<usize> {
    if needle.is_empty() {
        return Ok(0);
    }
    Ok(literal_ignore_case(needle)?.find_iter(value).count())
}

/// Returns the byte offset of the `occurrence`-th (1-based) non-overlapping
/// match of `needle`.
#[must_use]
pub fn nth_index_of(value: &str, needle: &str, occurrence: usize) -> Option<usize> {
    if needle.is_empty() || occurrence == 0 {
        return None;
    }
    value
        .match_indices(needle)
        .nth(occurrence - 1)
        .map(|(offset, _)| offset)
}

/// Counts runs of non-whitespace characters.
#[must_use]
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Removes every occurrence of the given characters.
#[must_use]
pub fn remove_chars(value: &str, chars: &[char]) -> String {
    value.chars().filter(|c| !chars.contains(c)).collect()
}

/// Removes the given characters in either case. Other characters keep their
/// case.
#[must_use]
pub fn remove_chars_ignore_case(value: &str, chars: &[char]) -> String {
    let lowered: Vec<char> = chars.iter().flat_map(|c| c.to_lowercase()).collect();
    value
        .chars()
        .filter(|c| !c.to_lowercase().all(|l| lowered.contains(&l)))
        .collect()
}

/// Removes every occurrence of `needle`.
#[must_use]
pub fn remove_str(value: &str, needle: &str) -> String {
    if needle.is_empty() {
        return value.to_string();
    }
    value.replace(needle, "")
}

/// Removes every occurrence of `needle`, ignoring case.
///
/// # Errors
///
/// Returns an invalid argument error if the needle is too large to compile
/// into a matcher.
pub fn remove_str_ignore_case(value: &str, needle: &str) -> Result<String> {
    if needle.is_empty() {
        return Ok(value.to_string());
    }
    Ok(literal_ignore_case(needle)?.replace_all(value, "").into_owned())
}

/// Strips carriage returns and line feeds from both ends.
#[must_use]
pub fn remove_line_feeds(value: &str) -> &str {
    value.trim_matches(&['\r', '\n'][..])
}

fn literal_ignore_case(needle: &str) -> Result<Regex> {
    RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .map_err(|err| {
            tracing::debug!(%err, "case-insensitive matcher rejected");
            Error::invalid_argument(err.to_string())
        })
}
