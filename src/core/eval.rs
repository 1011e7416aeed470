//! Placeholder evaluation.
//!
//! A placeholder body is either a plain key path (`user.name`) or a
//! transformation call (`default(user.nick,'anonymous')`). Evaluation never
//! fails: every outcome is replacement text, possibly empty or the `#ERROR`
//! sentinel, so one bad placeholder cannot take down the rest of the
//! template.

use serde_json::Value;

use crate::core::args::{Arg, parse_args};
use crate::core::resolve::resolve;
use crate::core::transform::{ERROR_TOKEN, Transform};

/// Evaluate one placeholder body (the text between `{{` and `}}`).
pub fn eval_placeholder(body: &str, data: &Value) -> String {
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }

    match split_call(body) {
        Some((name, raw_args)) => eval_call(name, raw_args, data),
        None => match resolve(data, body) {
            None | Some(Value::Null) => String::new(),
            Some(value) => display(value),
        },
    }
}

fn eval_call(name: &str, raw_args: &str, data: &Value) -> String {
    let Some(transform) = Transform::parse(name) else {
        return ERROR_TOKEN.to_string();
    };

    let args = parse_args(raw_args);
    let (value, rest) = match args.split_first() {
        // The first argument names the key path; an empty path misses
        Some((Arg::Str(path), rest)) => (resolve(data, path), rest),
        Some((Arg::Array(_), rest)) => (None, rest),
        None => (None, &args[..]),
    };

    transform
        .apply(value, rest)
        .unwrap_or_else(|_| ERROR_TOKEN.to_string())
}

/// Split `name(args)` call syntax spanning the whole body.
///
/// The name must be one or more identifier characters (ASCII alphanumerics
/// or underscore) and the body must end with the closing parenthesis.
/// Returns `None` for anything else, which the caller treats as a key path.
fn split_call(body: &str) -> Option<(&str, &str)> {
    let open = body.find('(')?;
    let name = &body[..open];
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return None;
    }
    let inner = body.strip_suffix(')')?;
    Some((name, &inner[open + 1..]))
}

/// Convert a resolved value to its display string.
///
/// Nulls display as the empty string; objects and arrays fall back to their
/// compact JSON form.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
