// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lenient field decoding for API records.
//!
//! Records are passed through from the API without schema validation, so a
//! field of the wrong JSON type decodes to `None` instead of failing the
//! whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode an optional text field.
///
/// Numbers and booleans are kept in their JSON text form (a team referenced
/// by id still shows something); objects, arrays and `null` become `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

/// Decode an optional integer field.
///
/// Accepts JSON integers, floats (truncated) and numeric strings.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// First present, non-empty value.
pub(crate) fn first_non_empty<'a>(
    candidates: impl IntoIterator<Item = Option<&'a str>>,
) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}
