//! Converting strings to values, and normalizing absent or blank strings.

use std::str::FromStr;

use extkit_foundation::{Error, Result};

/// Parses a loose boolean: `true`, `t`, `yes`, `y` and `false`, `f`, `no`,
/// `n`, ignoring case and surrounding whitespace.
///
/// # Errors
///
/// Returns a parse error for blank input or any other word.
pub fn to_boolean(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "t" | "yes" | "y" => Ok(true),
        "false" | "f" | "no" | "n" => Ok(false),
        _ => Err(Error::parse(value, "bool").in_operation("to_boolean")),
    }
}

/// Splits on any of `separators` and parses each trimmed piece as `T`.
///
/// With `remove_empty`, empty pieces are skipped instead of parsed.
///
/// # Errors
///
/// Returns a parse error for the first piece that does not parse.
pub fn split_to<T: FromStr>(value: &str, separators: &[char], remove_empty: bool) -> Result<Vec<T>> {
    value
        .split(separators)
        .filter(|piece| !(remove_empty && piece.is_empty()))
        .map(|piece| {
            piece.trim().parse::<T>().map_err(|_| {
                Error::parse(piece, std::any::type_name::<T>()).in_operation("split_to")
            })
        })
        .collect()
}

/// Returns the trimmed string, or an empty string when absent.
#[must_use]
pub fn empty_if_none(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// Returns the trimmed string, or `None` when absent or blank.
#[must_use]
pub fn none_if_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

/// Quotes a value as a CSV field, doubling embedded quotes.
///
/// Absent values become `""`.
#[must_use]
pub fn quote_csv(value: Option<&str>) -> String {
    format!("\"{}\"", empty_if_none(value).replace('"', "\"\""))
}
