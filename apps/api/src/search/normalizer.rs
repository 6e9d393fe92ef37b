//! Normalizer — total mapping from one raw Adzuna result to a `JobRecord`.

use serde_json::Value;

use crate::models::job::JobRecord;

/// Maps a raw result entry to a `JobRecord`. Never fails: anything missing,
/// null, or of the wrong type becomes `None`.
pub fn normalize(raw: &Value) -> JobRecord {
    JobRecord {
        title: text_field(raw.get("title")),
        company: text_field(raw.get("company").and_then(|c| c.get("display_name"))),
        location: text_field(raw.get("location").and_then(|l| l.get("display_name"))),
        description: text_field(raw.get("description")),
        url: text_field(raw.get("redirect_url")),
        salary_min: coerce_number(raw.get("salary_min")),
        salary_max: coerce_number(raw.get("salary_max")),
    }
}

/// Blank strings count as absent so they never form an empty group key.
fn text_field(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Numbers and numeric strings become `f64`; everything else is absent.
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
