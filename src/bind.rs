//! Field binding: assign a raw string to one field of a configuration value.
//!
//! The target is edited through its serde document (`serde_json::Value`):
//! serialize, replace the value at the field's dotted path, deserialize back.
//! The raw string is first coerced using the field's current representation,
//! so a `u16` port gets a number, a `bool` gets a boolean, and string-encoded
//! types (durations, addresses, enums) get the string and let their own
//! deserializer validate it.
//!
//! When the current value says nothing about the type (`null` for an unset
//! `Option`, or a list), several candidate values are tried in order and the
//! first one the field accepts wins.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use crate::error::LayerfigError;
use crate::types::Settings;

/// Assign `raw` to the field at dotted `path` of `target`.
///
/// `key` names where the value came from (a flag, an env var) and is used in
/// error messages. On error `target` is left untouched.
///
/// Only the serialized state is rebuilt; anything serde skips is handed back
/// through [`Settings::restore_skipped`].
pub fn bind<C: Settings>(target: &mut C, path: &str, key: &str, raw: &str) -> Result<(), LayerfigError> {
    let mut doc = to_document(target)?;
    let (parent, leaf) = parent_mut(&mut doc, path)?;
    let current = parent.get(leaf).cloned().unwrap_or(Value::Null);

    let candidates = coerce(&current, raw).map_err(|reason| LayerfigError::InvalidValue {
        key: key.to_string(),
        reason,
    })?;

    let mut first_err = None;
    for candidate in candidates {
        let (parent, leaf) = parent_mut(&mut doc, path)?;
        parent.insert(leaf.to_string(), candidate);
        match from_document(doc.clone(), key) {
            Ok(updated) => {
                let previous = std::mem::replace(target, updated);
                target.restore_skipped(previous);
                tracing::trace!(path, key, "bound field");
                return Ok(());
            }
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }
    }

    Err(first_err.unwrap_or_else(|| LayerfigError::InvalidValue {
        key: key.to_string(),
        reason: "no value to assign".into(),
    }))
}

/// Serialize `target` into its document form.
pub fn to_document<C: Serialize>(target: &C) -> Result<Value, LayerfigError> {
    serde_json::to_value(target).map_err(LayerfigError::Serialize)
}

/// Deserialize a document back into a configuration value.
///
/// Type mismatches are reported as [`LayerfigError::InvalidValue`] for `key`.
pub fn from_document<C: DeserializeOwned>(doc: Value, key: &str) -> Result<C, LayerfigError> {
    serde_json::from_value(doc).map_err(|e| LayerfigError::InvalidValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Read the value at dotted `path`, if present.
pub fn get_path<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |current, segment| current.get(segment))
}

/// Resolve the object holding the leaf of `path`, and the leaf name.
///
/// Every section on the way must already exist as an object; the leaf itself
/// may be missing (an `Option` skipped during serialization).
fn parent_mut<'d, 'p>(
    doc: &'d mut Value,
    path: &'p str,
) -> Result<(&'d mut Map<String, Value>, &'p str), LayerfigError> {
    let not_found = || LayerfigError::KeyNotFound(path.to_string());
    let (sections, leaf) = match path.rsplit_once('.') {
        Some((sections, leaf)) => (Some(sections), leaf),
        None => (None, path),
    };

    let mut current = doc.as_object_mut().ok_or_else(not_found)?;
    if let Some(sections) = sections {
        for segment in sections.split('.') {
            current = current
                .get_mut(segment)
                .and_then(Value::as_object_mut)
                .ok_or_else(not_found)?;
        }
    }
    Ok((current, leaf))
}

/// Candidate document values for `raw`, most specific first.
fn coerce(current: &Value, raw: &str) -> Result<Vec<Value>, String> {
    match current {
        Value::Bool(_) => parse_bool(raw)
            .map(|b| vec![Value::Bool(b)])
            .ok_or_else(|| format!("expected a boolean, got {raw:?}")),
        Value::Number(n) if n.is_f64() => parse_float(raw)
            .map(|f| vec![f])
            .ok_or_else(|| format!("expected a number, got {raw:?}")),
        Value::Number(_) => parse_integer(raw)
            .map(|i| vec![i])
            .ok_or_else(|| format!("expected an integer, got {raw:?}")),
        Value::String(_) => Ok(vec![Value::String(raw.to_string())]),
        Value::Array(_) => {
            let items: Vec<&str> = if raw.is_empty() {
                Vec::new()
            } else {
                raw.split(',').map(str::trim).collect()
            };
            let mut candidates = vec![Value::Array(
                items.iter().map(|s| guess_value(s)).collect(),
            )];
            let bools: Option<Vec<Value>> =
                items.iter().map(|s| parse_bool(s).map(Value::Bool)).collect();
            candidates.extend(bools.map(Value::Array));
            candidates.push(Value::Array(
                items.iter().map(|s| Value::String(s.to_string())).collect(),
            ));
            Ok(candidates)
        }
        Value::Null => {
            let mut candidates = vec![guess_value(raw)];
            candidates.extend(parse_bool(raw).map(Value::Bool));
            candidates.push(Value::String(raw.to_string()));
            Ok(candidates)
        }
        Value::Object(_) => Err("cannot assign a single value to a section".into()),
    }
}

/// Boolean spellings accepted for boolean fields.
fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn parse_integer(s: &str) -> Option<Value> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::from(i));
    }
    s.parse::<u64>().ok().map(Value::from)
}

fn parse_float(s: &str) -> Option<Value> {
    let f = s.trim().parse::<f64>().ok()?;
    Number::from_f64(f).map(Value::Number)
}

/// Best guess for a value whose field type is not visible in the document.
/// Tries: bool → integer → float → string.
fn guess_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::from(i);
    }
    // Only use float if the string actually contains a dot,
    // to avoid "NaN" / "inf" being parsed as float.
    if s.contains('.')
        && let Some(f) = parse_float(s)
    {
        return f;
    }
    Value::String(s.to_string())
}
