//! Number formatting.

/// Formats `value` with exactly `decimals` fractional digits, or returns an
/// empty string when absent.
#[must_use]
pub fn format_fixed(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(String::new, |v| format!("{v:.decimals$}"))
}
