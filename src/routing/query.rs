//! Query string parsing.
//!
//! # Design Decisions
//! - Parsing never fails; query data is advisory
//! - Values are opaque strings, no percent decoding
//! - Duplicate keys resolved last write wins

use std::collections::HashMap;

/// Flat key/value mapping derived from a query string.
pub type QueryMap = HashMap<String, String>;

/// Parse a raw query string into a [`QueryMap`].
///
/// Accepts an empty string or a string with an optional leading `?`.
/// Pairs are split on `&`, then on the first `=`; a pair with no `=`
/// maps to the empty string.
pub fn parse_query(raw: &str) -> QueryMap {
    let raw = raw.strip_prefix('?').unwrap_or(raw);

    let mut query = QueryMap::new();
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((key, value)) => query.insert(key.to_string(), value.to_string()),
            None => query.insert(pair.to_string(), String::new()),
        };
    }
    query
}
