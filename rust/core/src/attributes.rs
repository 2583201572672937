// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw parcel attributes as delivered by the upstream GIS export.
//!
//! Keys are schema dependent and values are loosely typed scalars. The map keeps
//! the order in which the attributes appeared in the source document.

use serde_json::Value;

/// Ordered attribute-name to scalar mapping.
pub type RawAttributes = serde_json::Map<String, Value>;

/// Display text of a scalar attribute value.
///
/// Strings are trimmed; blank strings, nulls and nested values yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Look up `key` and return its display text when present and non-empty.
#[inline]
pub fn attribute_text(raw: &RawAttributes, key: &str) -> Option<String> {
    raw.get(key).and_then(scalar_text)
}

/// Build a [`RawAttributes`] map from string pairs, keeping their order.
pub fn attributes_from_pairs<'a, I>(pairs: I) -> RawAttributes
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}
