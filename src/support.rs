// src/support.rs

//! Small helpers shared by callers of the scratch and transfer modules.

use serde_json::Value;
use tracing::error;

use crate::errors::ScrapeOpsError;

/// Log `message` at error level and hand back an error carrying it.
///
/// The error is returned, not raised: the caller decides whether to
/// propagate it.
pub fn on_error(message: impl Into<String>) -> ScrapeOpsError {
    let message = message.into();
    error!("{}", message);
    ScrapeOpsError::Reported(message)
}

/// Predicate matching JSON objects whose field `key` equals `value` exactly.
///
/// Values of different JSON types never match; numbers compare by value, so
/// `2016` matches `2016.0`. Non-objects and objects without `key` never
/// match. Intended for `Iterator::find` / `position` over a list of records.
pub fn search(key: impl Into<String>, value: impl Into<Value>) -> impl Fn(&Value) -> bool {
    let key = key.into();
    let value = value.into();
    move |element: &Value| {
        element
            .get(&key)
            .is_some_and(|field| strictly_equal(field, &value))
    }
}

fn strictly_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}
