//! Validation coercers for the persisted state fields.
//!
//! Coercion never fails: invalid input is normalized to a guaranteed-valid
//! value (keys dropped, lists truncated, defaults substituted) and the
//! outcome is tagged so callers can tell whether anything was adjusted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-date lists (activities, attachments) are capped at this length.
pub const MAX_ENTRIES_PER_DAY: usize = 50;

/// Fallback for a missing or non-numeric target score.
pub const DEFAULT_TARGET_SCORE: f64 = 75.0;

/// Outcome of a coercion: the input was either already valid, or had to be
/// normalized to reach a valid value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coerced<T> {
    Valid(T),
    Adjusted(T),
}

impl<T> Coerced<T> {
    /// The guaranteed-valid value, whichever way it was reached.
    pub fn into_inner(self) -> T {
        match self {
            Coerced::Valid(v) | Coerced::Adjusted(v) => v,
        }
    }

    pub fn was_adjusted(&self) -> bool {
        matches!(self, Coerced::Adjusted(_))
    }
}

/// A file attached to a calendar day. Only metadata is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    #[serde(default)]
    pub size: u64,
}

/// Strict `YYYY-MM-DD` check: exact shape plus a real calendar date.
pub fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
    digits_ok && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerce the `student_activities` field: a map from ISO date to at most
/// [`MAX_ENTRIES_PER_DAY`] free-text entries. Invalid keys and non-array
/// values are dropped silently; excess entries are truncated, not rejected.
pub fn coerce_activities(value: &Value) -> Coerced<BTreeMap<String, Vec<String>>> {
    let Some(obj) = value.as_object() else {
        return Coerced::Adjusted(BTreeMap::new());
    };
    let mut out = BTreeMap::new();
    let mut adjusted = false;
    for (key, entries) in obj {
        if !is_iso_date(key) {
            adjusted = true;
            continue;
        }
        let Some(items) = entries.as_array() else {
            adjusted = true;
            continue;
        };
        if items.len() > MAX_ENTRIES_PER_DAY || items.iter().any(|v| !v.is_string()) {
            adjusted = true;
        }
        let list: Vec<String> = items
            .iter()
            .take(MAX_ENTRIES_PER_DAY)
            .map(stringify)
            .collect();
        out.insert(key.clone(), list);
    }
    if adjusted {
        Coerced::Adjusted(out)
    } else {
        Coerced::Valid(out)
    }
}

fn attachment_from(value: &Value) -> Attachment {
    match value.as_object() {
        Some(map) => {
            let name = match map.get("name") {
                Some(Value::Null) | None => stringify(value),
                Some(n) => stringify(n),
            };
            let size = map
                .get("size")
                .and_then(Value::as_f64)
                .filter(|s| s.is_finite() && *s > 0.0)
                .map(|s| s as u64)
                .unwrap_or(0);
            Attachment { name, size }
        }
        None => Attachment {
            name: stringify(value),
            size: 0,
        },
    }
}

/// Coerce the `attachments` field: same key and truncation policy as
/// [`coerce_activities`], each entry normalized to `{name, size >= 0}`.
pub fn coerce_attachments(value: &Value) -> Coerced<BTreeMap<String, Vec<Attachment>>> {
    let Some(obj) = value.as_object() else {
        return Coerced::Adjusted(BTreeMap::new());
    };
    let mut out = BTreeMap::new();
    let mut adjusted = false;
    for (key, entries) in obj {
        if !is_iso_date(key) {
            adjusted = true;
            continue;
        }
        let Some(items) = entries.as_array() else {
            adjusted = true;
            continue;
        };
        if items.len() > MAX_ENTRIES_PER_DAY {
            adjusted = true;
        }
        let list: Vec<Attachment> = items
            .iter()
            .take(MAX_ENTRIES_PER_DAY)
            .map(attachment_from)
            .collect();
        out.insert(key.clone(), list);
    }
    if adjusted {
        Coerced::Adjusted(out)
    } else {
        Coerced::Valid(out)
    }
}

/// Coerce the `exam_date` field: a valid ISO date string, or empty (unset).
pub fn coerce_exam_date(value: &Value) -> Coerced<String> {
    match value.as_str() {
        Some("") => Coerced::Valid(String::new()),
        Some(s) if is_iso_date(s) => Coerced::Valid(s.to_string()),
        _ => Coerced::Adjusted(String::new()),
    }
}

/// Coerce the `target_score` field: a finite number (numeric strings are
/// accepted), anything else becomes [`DEFAULT_TARGET_SCORE`].
pub fn coerce_target_score(value: &Value) -> Coerced<f64> {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(x) if x.is_finite() => Coerced::Valid(x),
            _ => Coerced::Adjusted(DEFAULT_TARGET_SCORE),
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(x) if x.is_finite() => Coerced::Adjusted(x),
            _ => Coerced::Adjusted(DEFAULT_TARGET_SCORE),
        },
        _ => Coerced::Adjusted(DEFAULT_TARGET_SCORE),
    }
}
