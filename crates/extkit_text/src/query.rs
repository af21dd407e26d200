//! Query string parsing.

use std::collections::BTreeMap;

/// Parses the query part of a URL or bare `?a=1&b=2` string.
///
/// Keys are trimmed and lower-cased; a pair without `=` maps to an empty
/// value, and a repeated key keeps its last value. Returns `None` when the
/// input is blank, has no `?`, or has no `=` after it.
#[must_use]
pub fn query_to_map(value: &str) -> Option<BTreeMap<String, String>> {
    if value.trim().is_empty() {
        return None;
    }
    let (_, query) = value.split_once('?')?;
    if !query.contains('=') {
        return None;
    }
    let query = query.split_once('#').map_or(query, |(query, _)| query);
    let map = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key.trim().to_lowercase(), value.to_string())
        })
        .collect();
    Some(map)
}
