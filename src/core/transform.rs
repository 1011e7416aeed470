//! The fixed set of value transformations.
//!
//! Transformations are invoked from placeholders with call syntax, e.g.
//! `{{default(user.nick,'anonymous')}}`. The set is closed: dispatch is an
//! exhaustive match, and a name outside the set is rejected by the evaluator
//! before it gets here.

use anyhow::{Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::core::args::Arg;
use crate::core::eval::display;

/// In-band sentinel inserted at the placeholder position when a
/// transformation fails.
pub const ERROR_TOKEN: &str = "#ERROR";

/// Numeric epoch values at or above this are milliseconds, below it seconds.
const MILLIS_CUTOFF: f64 = 1e11;

/// Short date shape: `3/15/2023`, no zero padding.
const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// A named value transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Substitute a fallback for missing or null values.
    Default,
    /// Render an epoch number or date string as a short date.
    Date,
    /// Apply literal search/replacement pairs in order.
    Replace,
}

impl Transform {
    /// Look up a transformation by name. Names are case sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::Default),
            "date" => Some(Self::Date),
            "replace" => Some(Self::Replace),
            _ => None,
        }
    }

    /// Apply the transformation to a resolved value and its remaining
    /// arguments. The evaluator maps any error to [`ERROR_TOKEN`].
    pub fn apply(&self, value: Option<&Value>, args: &[Arg]) -> Result<String> {
        match self {
            Self::Default => apply_default(value, args),
            Self::Date => apply_date(value),
            Self::Replace => Ok(apply_replace(value, args)),
        }
    }
}

fn apply_default(value: Option<&Value>, args: &[Arg]) -> Result<String> {
    let fallback = match args.first() {
        Some(Arg::Str(fallback)) => fallback,
        Some(Arg::Array(_)) => bail!("default: fallback must be a string"),
        None => bail!("default: missing fallback argument"),
    };

    Ok(match value {
        None | Some(Value::Null) => fallback.clone(),
        Some(value) => display(value),
    })
}

fn apply_date(value: Option<&Value>) -> Result<String> {
    let Some(value) = value else {
        return Ok(String::new());
    };

    let instant = match value {
        Value::Null => return Ok(String::new()),
        Value::String(s) if s.is_empty() => return Ok(String::new()),
        Value::String(s) => parse_datetime(s),
        Value::Number(n) => n.as_f64().and_then(epoch_to_datetime),
        _ => None,
    };

    match instant {
        Some(instant) => Ok(instant.format(SHORT_DATE_FORMAT).to_string()),
        None => bail!("date: value is not a recognizable date"),
    }
}

fn epoch_to_datetime(epoch: f64) -> Option<DateTime<Utc>> {
    if !epoch.is_finite() {
        return None;
    }
    if epoch < MILLIS_CUTOFF {
        DateTime::from_timestamp(epoch as i64, 0)
    } else {
        DateTime::from_timestamp_millis(epoch as i64)
    }
}

/// Parse a date string against a fixed ladder of common formats.
fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(ndt.and_utc());
    }
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}

fn apply_replace(value: Option<&Value>, args: &[Arg]) -> String {
    let mut output = match value {
        None | Some(Value::Null) => String::new(),
        Some(value) => display(value),
    };

    for arg in args {
        // Anything other than a [search, replacement] pair is skipped
        let Arg::Array(pair) = arg else { continue };
        let [search, replacement] = pair.as_slice() else {
            continue;
        };
        if search.is_empty() {
            continue;
        }
        output = output.replace(search.as_str(), replacement);
    }
    output
}
