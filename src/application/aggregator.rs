// Aggregation of raw records into chart series and summary statistics
use crate::domain::record;
use crate::domain::series::Series;
use crate::domain::stats::{ClientStats, LeadStats, TaskStats};
use serde_json::Value;

/// Count records per category produced by `key_fn`, in first-seen order.
///
/// A record whose key cannot be evaluated is skipped with a diagnostic;
/// partial results are acceptable.
pub fn count_by_key<F>(records: &[Value], key_fn: F) -> Series
where
    F: Fn(&Value) -> anyhow::Result<String>,
{
    let mut series = Series::default();
    for record in records {
        match key_fn(record) {
            Ok(key) => series.increment(&key),
            Err(e) => tracing::warn!("Skipping record during aggregation: {}", e),
        }
    }
    series
}

/// Count records into a fixed category layout.
///
/// Every category is always present, zero-filled, so the chart layout
/// stays stable. Keys outside `categories` are not counted.
pub fn count_fixed<F, L>(records: &[Value], key_fn: F, categories: &[&str], label_fn: L) -> Series
where
    F: Fn(&Value) -> anyhow::Result<String>,
    L: Fn(&str) -> String,
{
    let labels = categories.iter().map(|c| label_fn(c)).collect();
    let mut values = vec![0u64; categories.len()];
    for record in records {
        match key_fn(record) {
            Ok(key) => match categories.iter().position(|c| *c == key) {
                Some(i) => values[i] += 1,
                None => tracing::debug!("Ignoring record with category {} outside the fixed set", key),
            },
            Err(e) => tracing::warn!("Skipping record during aggregation: {}", e),
        }
    }
    Series::new(labels, values)
}

/// Category for a client or lead record: the `status` field, defaulting
/// to `Unknown` when missing or not a string.
pub fn status_key(record: &Value) -> anyhow::Result<String> {
    require_object(record)?;
    Ok(record::status(record).unwrap_or(record::UNKNOWN_STATUS).to_string())
}

/// Category for a task record: the `priority` field, defaulting to
/// `Medium` when missing or not a string.
pub fn priority_key(record: &Value) -> anyhow::Result<String> {
    require_object(record)?;
    Ok(record::priority(record)
        .unwrap_or(record::DEFAULT_PRIORITY)
        .to_string())
}

fn require_object(record: &Value) -> anyhow::Result<()> {
    if record.is_object() {
        Ok(())
    } else {
        anyhow::bail!("record is not an object")
    }
}

pub fn count_matching<F>(records: &[Value], predicate: F) -> u64
where
    F: Fn(&Value) -> bool,
{
    records.iter().filter(|r| predicate(r)).count() as u64
}

/// part/total as a percentage rounded to one decimal. Zero totals give
/// `0.0`; a non-finite result is coerced to `0.0` rather than surfaced.
pub fn rate_percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = part as f64 / total as f64 * 100.0;
    if !rate.is_finite() {
        return 0.0;
    }
    (rate * 10.0).round() / 10.0
}

pub fn status_is(record: &Value, status: &str) -> bool {
    record::status(record) == Some(status)
}

pub fn priority_is(record: &Value, priority: &str) -> bool {
    record::priority(record) == Some(priority)
}

pub fn client_stats(records: &[Value]) -> ClientStats {
    let total = records.len() as u64;
    let active = count_matching(records, |r| status_is(r, "Active"));
    let vip = count_matching(records, |r| status_is(r, "VIP"));
    ClientStats::new(total, active, vip, rate_percent(active, total))
}

pub fn lead_stats(records: &[Value]) -> LeadStats {
    let total = records.len() as u64;
    let converted = count_matching(records, |r| status_is(r, "Converted"));
    LeadStats::new(total, converted, rate_percent(converted, total))
}

pub fn task_stats(records: &[Value]) -> TaskStats {
    let total = records.len() as u64;
    let high = count_matching(records, |r| priority_is(r, "High"));
    TaskStats::new(total, high, rate_percent(high, total))
}
