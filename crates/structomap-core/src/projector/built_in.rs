//! Built-in converters and predicates for common projections
//!
//! Copyright (c) 2025 Structomap Team
//! Licensed under the Apache-2.0 license

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Return the value unchanged
pub fn identity() -> impl Fn(Value) -> Value + Send + Sync + Clone + 'static {
    |value: Value| value
}

/// Render any value as a JSON string; strings pass through as they are
pub fn to_string() -> impl Fn(Value) -> Value + Send + Sync + Clone + 'static {
    |value: Value| {
        if value.is_string() {
            value
        } else {
            Value::String(value.to_string())
        }
    }
}

/// Normalise a timestamp to RFC 3339 in UTC with second precision
///
/// Values that are not parseable timestamps are returned unchanged.
pub fn rfc3339() -> impl Fn(Value) -> Value + Send + Sync + Clone + 'static {
    |value: Value| {
        let parsed = value
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok());
        match parsed {
            Some(timestamp) => Value::String(
                timestamp
                    .with_timezone(&Utc)
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            None => value,
        }
    }
}

/// Ignore the input and always produce `value`
pub fn constant(value: Value) -> impl Fn(Value) -> Value + Send + Sync + Clone + 'static {
    move |_: Value| value.clone()
}

/// Predicate that always holds
pub fn always<T: ?Sized + 'static>() -> impl Fn(&T) -> bool + Send + Sync + Clone + 'static {
    |_: &T| true
}

/// Predicate that never holds
pub fn never<T: ?Sized + 'static>() -> impl Fn(&T) -> bool + Send + Sync + Clone + 'static {
    |_: &T| false
}
