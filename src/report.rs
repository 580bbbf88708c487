//! Text renderings of a [`Summary`]: the full metric dump, the key-metrics
//! dashboard, and JSON.
//!
//! Rendering works on the JSON form of the summary so every lookup can fall
//! back to [`UNAVAILABLE`] instead of failing when a metric is absent.

use itertools::Itertools;
use serde_json::Value;

use crate::{error::Result, summary::Summary, table};

pub const UNAVAILABLE: &str = "unavailable";

/// The summary as a JSON object keyed by metric name, in computation order.
pub fn bundle(summary: &Summary) -> Result<Value> {
    Ok(serde_json::to_value(summary)?)
}

pub fn render_json(summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// Every metric on its own line.
pub fn render_report(summary: &Summary) -> Result<String> {
    let items = match bundle(summary)? {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| (key.clone(), format_value(value)))
            .collect::<Vec<_>>(),
        _ => Vec::new(),
    };
    Ok(table::render_key_values(&items))
}

/// Label and rendered value for the eight headline metrics.
pub fn dashboard_items(summary: &Summary) -> Result<Vec<(String, String)>> {
    let bundle = bundle(summary)?;
    let departments = lookup(&bundle, &["unique_departments"])
        .and_then(Value::as_array)
        .map(|values| values.iter().map(format_value).join(", "));

    let items = vec![
        ("Total Employees", display(&bundle, &["total_employees"])),
        (
            "Departments",
            departments.unwrap_or_else(|| UNAVAILABLE.to_string()),
        ),
        ("Gender Counts", display(&bundle, &["gender_counts"])),
        ("Attritions (Yes)", display(&bundle, &["total_attritions"])),
        (
            "Avg Work-Life Balance",
            display(&bundle, &["avg_work_life_balance"]),
        ),
        ("Avg Age", display(&bundle, &["age_stats", "avg"])),
        ("Avg Hourly Rate", display(&bundle, &["hourly_rate_stats", "avg"])),
        (
            "Avg Distance From Home",
            display(&bundle, &["distance_from_home_stats", "avg"]),
        ),
    ]
    .into_iter()
    .map(|(label, value)| (label.to_string(), value))
    .collect();
    Ok(items)
}

pub fn render_dashboard(summary: &Summary) -> Result<String> {
    Ok(table::render_key_values(&dashboard_items(summary)?))
}

/// Walks nested object keys; JSON `null` counts as missing.
pub fn lookup<'a>(bundle: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(bundle, |value, key| value.get(key))
        .filter(|value| !value.is_null())
}

fn display(bundle: &Value, path: &[&str]) -> String {
    lookup(bundle, path)
        .map(format_value)
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => UNAVAILABLE.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => format!("[{}]", items.iter().map(format_value).join(", ")),
        Value::Object(map) => format!(
            "{{{}}}",
            map.iter()
                .map(|(key, value)| format!("{key}: {}", format_value(value)))
                .join(", ")
        ),
        other => other.to_string(),
    }
}
