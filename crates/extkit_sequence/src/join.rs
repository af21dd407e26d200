//! Rendering sequences as text.

use std::fmt::{Display, Write};

/// Joins the `Display` output of each element with `separator`.
///
/// An empty source gives an empty string.
pub fn join<I>(source: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (index, item) in source.into_iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        let _ = write!(out, "{item}");
    }
    out
}

/// Joins elements with `,`.
pub fn to_csv<I>(source: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join(source, ",")
}

/// Wraps each element in `<tag>` and `</tag>` and concatenates the results.
///
/// Handy for turning a list into a block of HTML or XML.
pub fn wrap_each_with_tag<I>(source: I, tag: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for item in source {
        let _ = write!(out, "<{tag}>{item}</{tag}>");
    }
    out
}
