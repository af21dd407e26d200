//! Capitalization and camel-case splitting.

use std::sync::OnceLock;

use regex::Regex;

static CAMEL_WORD_REGEX: OnceLock<Regex> = OnceLock::new();

/// Upper-cases the first character and lower-cases the rest.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Splits a camel- or Pascal-cased identifier into its words.
///
/// Runs of digits form their own words, and other characters act as
/// separators: `"parseHTTP2Response"` gives
/// `["parse", "H", "T", "T", "P", "2", "Response"]`.
#[must_use]
pub fn split_camel_case(value: &str) -> Vec<&str> {
    let regex = CAMEL_WORD_REGEX
        .get_or_init(|| Regex::new(r"[A-Z][a-z]*|[a-z]+|[0-9]+").expect("Invalid regex"));
    regex.find_iter(value).map(|m| m.as_str()).collect()
}

/// Turns a camel-cased identifier into space-separated words.
#[must_use]
pub fn to_human_case(value: &str) -> String {
    split_camel_case(value).join(" ")
}

/// Lower-cases the input, then upper-cases the first letter of every word.
///
/// A word starts at the beginning of the input or after whitespace or a
/// hyphen.
#[must_use]
pub fn to_title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = c.is_whitespace() || c == '-';
    }
    out
}
