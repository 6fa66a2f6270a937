//! Metric-ratio extraction across the two recognized document shapes.
//!
//! Benchmark results arrive in one of two JSON layouts:
//!
//! - *Discipline-style*: a top-level `summary` object whose
//!   `disciplineAdvantageRatio` and `safetyAdvantageRatio` fields are
//!   addressed by the metric names [`EFFECT_DISCIPLINE`] and [`SAFETY`].
//! - *Standard-style*: a top-level `metrics` object mapping each metric
//!   name to a bare number or to an object with a `ratio` field.
//!
//! Extraction checks the discipline-style shape first. Absence of a
//! metric is a normal outcome, never an error.

use serde_json::Value;

/// Metric name backed by `summary.disciplineAdvantageRatio`.
pub const EFFECT_DISCIPLINE: &str = "EffectDiscipline";

/// Metric name backed by `summary.safetyAdvantageRatio`.
pub const SAFETY: &str = "Safety";

/// Extract the ratio for `metric` from a benchmark document.
///
/// Returns `None` when the document does not carry a numeric value for
/// the metric under either recognized shape. A `summary` object is
/// authoritative for the two discipline metrics: when present, its value
/// (or its absence) is returned without consulting `metrics`. Any other
/// metric name falls through to the `metrics` lookup.
pub fn metric_ratio(document: &Value, metric: &str) -> Option<f64> {
    if let Some(summary) = document.get("summary").and_then(Value::as_object) {
        match metric {
            EFFECT_DISCIPLINE => {
                return summary.get("disciplineAdvantageRatio").and_then(Value::as_f64);
            }
            SAFETY => {
                return summary.get("safetyAdvantageRatio").and_then(Value::as_f64);
            }
            // other metric names are not summary-backed; try `metrics`
            _ => {}
        }
    }

    if let Some(metrics) = document.get("metrics").and_then(Value::as_object) {
        return match metrics.get(metric) {
            Some(Value::Object(entry)) => entry.get("ratio").and_then(Value::as_f64),
            Some(value) => value.as_f64(),
            None => None,
        };
    }

    None
}
