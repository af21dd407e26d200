//! Enum helpers built on `strum`.
//!
//! Derive `EnumIter`, `AsRefStr` and `EnumMessage` on an enum to use these.

use strum::{EnumMessage, IntoEnumIterator};

/// Lists every variant in declaration order.
#[must_use]
pub fn variants<E: IntoEnumIterator>() -> Vec<E> {
    E::iter().collect()
}

/// Returns the variant's `#[strum(message = "...")]`, falling back to its
/// name.
#[must_use]
pub fn description<E>(value: &E) -> &str
where
    E: EnumMessage + AsRef<str>,
{
    match value.get_message() {
        Some(message) => message,
        None => value.as_ref(),
    }
}

/// Parses a variant by name, returning `default` when nothing matches.
///
/// Surrounding whitespace is ignored.
#[must_use]
pub fn parse_enum_or<E>(value: &str, default: E, ignore_case: bool) -> E
where
    E: IntoEnumIterator + AsRef<str>,
{
    let value = value.trim();
    E::iter()
        .find(|variant| {
            let name = variant.as_ref();
            if ignore_case {
                name.eq_ignore_ascii_case(value)
            } else {
                name == value
            }
        })
        .unwrap_or_else(|| {
            tracing::trace!(value, "no matching variant, using default");
            default
        })
}
