//! Masking and formatting of emails, phone numbers and URL slugs.

use std::sync::OnceLock;

use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static SLUG_WORD_REGEX: OnceLock<Regex> = OnceLock::new();

/// Options for the masking helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaskOptions {
    /// Character written over hidden content.
    pub mask_char: char,
    /// How many trailing phone digits stay visible.
    pub visible_phone_digits: usize,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            mask_char: '*',
            visible_phone_digits: 4,
        }
    }
}

impl MaskOptions {
    /// Builder method to set the mask character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Builder method to set the number of visible trailing phone digits.
    #[must_use]
    pub fn with_visible_phone_digits(mut self, digits: usize) -> Self {
        self.visible_phone_digits = digits;
        self
    }
}

/// Options for [`seo_slug`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlugOptions {
    /// Literal replacements applied before slugging, in order.
    pub replacements: Vec<(String, String)>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            replacements: vec![
                ("C#".to_string(), "c-sharp".to_string()),
                ("F#".to_string(), "f-sharp".to_string()),
            ],
        }
    }
}

impl SlugOptions {
    /// Creates options with no replacements.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            replacements: Vec::new(),
        }
    }

    /// Builder method to add a replacement.
    #[must_use]
    pub fn with_replacement(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.replacements.push((from.into(), to.into()));
        self
    }
}

/// Keeps only the ASCII digits.
#[must_use]
pub fn only_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Masks an email address, keeping its outline readable.
///
/// The local part keeps its first and last characters and the first domain
/// label keeps its first character: `john.doe@example.com` becomes
/// `j******e@e******.com`. Input without `@` is masked entirely, and a local
/// part shorter than four characters collapses to `*@*.*`.
#[must_use]
pub fn mask_email(value: &str, options: &MaskOptions) -> String {
    let mask = options.mask_char;
    let Some((local, domain)) = value.split_once('@') else {
        return std::iter::repeat_n(mask, value.chars().count()).collect();
    };
    if local.chars().count() < 4 {
        return format!("{mask}@{mask}.{mask}");
    }

    let mut out = String::with_capacity(value.len());
    mask_inner(&mut out, local, mask);
    out.push('@');
    match domain.split_once('.') {
        Some((label, rest)) if !label.is_empty() => {
            let mut chars = label.chars();
            out.extend(chars.next());
            out.extend(chars.map(|_| mask));
            out.push('.');
            out.push_str(rest);
        }
        _ => out.push_str(domain),
    }
    out
}

/// Writes `part` with every character except the first and last masked.
fn mask_inner(out: &mut String, part: &str, mask: char) {
    let count = part.chars().count();
    for (index, c) in part.chars().enumerate() {
        if index == 0 || index + 1 == count {
            out.push(c);
        } else {
            out.push(mask);
        }
    }
}

/// Masks every digit except the trailing run of visible digits.
///
/// Only digits at the very end of the input can stay visible:
/// `555-123-4567` becomes `***-***-4567`.
#[must_use]
pub fn mask_phone_number(value: &str, options: &MaskOptions) -> String {
    let trailing_digits = value.chars().rev().take_while(char::is_ascii_digit).count();
    let visible = trailing_digits.min(options.visible_phone_digits);
    let keep_from = value.chars().count() - visible;
    value
        .chars()
        .enumerate()
        .map(|(index, c)| {
            if index < keep_from && c.is_ascii_digit() {
                options.mask_char
            } else {
                c
            }
        })
        .collect()
}

/// Formats each run of ten digits as `(XXX)-XXX-XXXX`.
#[must_use]
pub fn to_phone_number(value: &str) -> String {
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"(\d{3})(\d{3})(\d{4})").expect("Invalid regex"));
    regex.replace_all(value, "($1)-$2-$3").into_owned()
}

/// Builds a lowercase, hyphen-separated URL slug of at most `max_length`
/// characters from whole words of `title`.
///
/// If the first word alone is too long it is cut to `max_length`.
#[must_use]
pub fn seo_slug(title: &str, max_length: usize, options: &SlugOptions) -> String {
    let mut title = title.to_string();
    for (from, to) in &options.replacements {
        title = title.replace(from.as_str(), to);
    }
    let title = title.to_lowercase();

    let regex = SLUG_WORD_REGEX.get_or_init(|| Regex::new(r"\w+").expect("Invalid regex"));
    let mut slug = String::new();
    let mut slug_len = 0;
    for word in regex.find_iter(&title).map(|m| m.as_str()) {
        let word_len = word.chars().count();
        if slug_len + word_len <= max_length {
            slug.push_str(word);
            slug.push('-');
            slug_len += word_len + 1;
        } else {
            if slug.is_empty() {
                slug.extend(word.chars().take(max_length));
            }
            break;
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    tracing::trace!(%slug, max_length, "built slug");
    slug
}
