//! Upstream payload normalization.
//!
//! LeakCheck's JSON is loosely typed. Every field read here has a declared
//! default and a declared fallback, so absent or mistyped values never get
//! past this module.

use serde_json::{Map, Value};

use crate::config::UNKNOWN_FIELD;
use crate::error_handling::LookupError;
use crate::models::{Breach, LookupResult};

/// Parses a response body into a JSON document.
///
/// # Errors
///
/// Returns `LookupError::InvalidJson` if the body is not JSON at all.
pub fn parse_body(body: &str) -> Result<Value, LookupError> {
    serde_json::from_str(body).map_err(|_| LookupError::InvalidJson)
}

/// Maps a parsed upstream document onto a [`LookupResult`].
///
/// # Errors
///
/// - `LookupError::UnexpectedFormat` if the document is not an object
/// - `LookupError::UpstreamRejected` if `success` is missing or falsy
pub fn normalize(email: &str, data: Value) -> Result<LookupResult, LookupError> {
    let Value::Object(ref object) = data else {
        return Err(LookupError::UnexpectedFormat);
    };

    if !object.get("success").is_some_and(is_truthy) {
        return Err(LookupError::UpstreamRejected);
    }

    let fields = exposed_fields(object.get("fields"));
    let breaches: Vec<Breach> = source_entries(object.get("sources"))
        .iter()
        .map(|source| breach_from_source(source, &fields))
        .collect();

    let breach_count = match object.get("found") {
        // Absent means zero, like any other integer count
        None => 0,
        Some(found) => found.as_u64().unwrap_or(breaches.len() as u64),
    };

    Ok(LookupResult {
        email: email.to_string(),
        breach_count,
        breaches,
        raw: data,
    })
}

/// Truthiness of a JSON value: null, false, zero and empty containers are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn exposed_fields(fields: Option<&Value>) -> Vec<String> {
    match fields {
        None => Vec::new(),
        Some(value) if !is_truthy(value) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(text_of).collect(),
        Some(other) => vec![text_of(other)],
    }
}

fn source_entries(sources: Option<&Value>) -> &[Value] {
    match sources {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

fn breach_from_source(source: &Value, fields: &[String]) -> Breach {
    let entry = source.as_object();
    Breach {
        name: field_or_unknown(entry, "name"),
        date: field_or_unknown(entry, "date"),
        exposed_fields: fields.to_vec(),
    }
}

fn field_or_unknown(entry: Option<&Map<String, Value>>, key: &str) -> String {
    entry
        .and_then(|map| map.get(key))
        .filter(|value| is_truthy(value))
        .map(text_of)
        .unwrap_or_else(|| UNKNOWN_FIELD.to_string())
}

/// Strings as-is, anything else as its JSON text.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
