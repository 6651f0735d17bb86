//! Per-value coercers shared by decision and evidence rows.
//!
//! Each one is total: anything it cannot accept comes back as `None`.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

pub type Row = Map<String, Value>;

/// Look up `key`, treating an explicit JSON null the same as a missing key.
pub fn field<'a>(row: Option<&'a Row>, key: &str) -> Option<&'a Value> {
    row?.get(key).filter(|v| !v.is_null())
}

/// Look up `canonical`, falling back to `legacy` when canonical is absent.
pub fn field_or_legacy<'a>(row: Option<&'a Row>, canonical: &str, legacy: &str) -> Option<&'a Value> {
    field(row, canonical).or_else(|| field(row, legacy))
}

/// Finite number from a JSON number or a trimmed numeric string.
pub fn to_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                return None;
            }
            t.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Non-negative counter: truncated toward zero, negatives clamp to 0.
pub fn to_count(value: Option<&Value>) -> u64 {
    match to_number(value) {
        // `as` saturates for values beyond u64::MAX.
        Some(n) if n > 0.0 => n.trunc() as u64,
        _ => 0,
    }
}

/// Trimmed string; blanks and non-strings are `None`.
pub fn to_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        }
        _ => None,
    }
}

/// Trimmed string that parses as an ISO-8601 date or date-time.
pub fn to_timestamp(value: Option<&Value>) -> Option<String> {
    to_text(value).filter(|s| parse_timestamp(s).is_some())
}

pub fn to_bool(value: Option<&Value>) -> Option<bool> {
    value?.as_bool()
}

/// Exact, case-sensitive enum match. No trimming.
pub fn to_enum<T>(value: Option<&Value>, parse: fn(&str) -> Option<T>) -> Option<T> {
    value?.as_str().and_then(parse)
}

/// Date-time shapes carrying an offset (`Z`, `+hh`, `+hhmm`, `+hh:mm`).
const OFFSET_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

/// Date-time shapes without an offset; read as UTC.
const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Parse an ISO-8601 timestamp. Extended and basic forms, minute or
/// second precision, and `.` or `,` fractions are accepted. Offsets are
/// honored; naive values are UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // ISO-8601 allows a comma before the fraction; chrono only reads `.`.
    let s: Cow<'_, str> = if s.contains(',') {
        Cow::Owned(s.replace(',', "."))
    } else {
        Cow::Borrowed(s)
    };
    let s = s.as_ref();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(naive.and_utc());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
