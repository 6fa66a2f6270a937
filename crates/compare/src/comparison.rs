//! Comparison types and the metric comparator.

use crate::extract::metric_ratio;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Per-metric comparison between a baseline and a current run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    /// Ratio extracted from the baseline document.
    pub baseline: f64,
    /// Ratio extracted from the current document.
    pub current: f64,
    /// Absolute change, `current - baseline`.
    pub change: f64,
    /// Change as a percentage of the baseline; exactly 0 when the
    /// baseline ratio is exactly 0.
    pub change_pct: f64,
    /// Whether the ratio moved up.
    pub improved: bool,
}

impl MetricComparison {
    /// Build a comparison from two present ratios.
    pub fn new(baseline: f64, current: f64) -> Self {
        let change = current - baseline;
        let change_pct = if baseline == 0.0 {
            0.0
        } else {
            change / baseline * 100.0
        };
        Self {
            baseline,
            current,
            change,
            change_pct,
            improved: change > 0.0,
        }
    }
}

/// Ordered set of per-metric comparisons, keyed by metric name.
///
/// Iteration follows insertion order; for the all-metrics comparator
/// that is the order of the baseline document's `metrics` object.
/// Serializes as a JSON object in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSet {
    entries: Vec<(String, MetricComparison)>,
}

impl ComparisonSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comparison under `name`.
    pub fn insert(&mut self, name: impl Into<String>, comparison: MetricComparison) {
        self.entries.push((name.into(), comparison));
    }

    /// Look up a comparison by metric name.
    pub fn get(&self, name: &str) -> Option<&MetricComparison> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, comparison)| comparison)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricComparison)> {
        self.entries
            .iter()
            .map(|(name, comparison)| (name.as_str(), comparison))
    }

    /// Number of compared metrics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no metric could be compared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ComparisonSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, comparison) in &self.entries {
            map.serialize_entry(name, comparison)?;
        }
        map.end()
    }
}

/// Compare two benchmark documents.
///
/// With `metric` given, the result holds at most that one entry; it is
/// empty when either document lacks the metric. With `metric` omitted,
/// every metric named by the baseline's `metrics` object is compared in
/// document order, and both documents must carry a `metrics` object for
/// anything to be compared at all. A metric is included only when both
/// documents yield a ratio for it.
///
/// Pure: no I/O, inputs are not mutated.
pub fn compare(baseline: &Value, current: &Value, metric: Option<&str>) -> ComparisonSet {
    let mut comparisons = ComparisonSet::new();

    match metric {
        Some(name) => {
            if let (Some(baseline_ratio), Some(current_ratio)) =
                (metric_ratio(baseline, name), metric_ratio(current, name))
            {
                comparisons.insert(name, MetricComparison::new(baseline_ratio, current_ratio));
            }
        }
        None => {
            let (Some(baseline_metrics), Some(_)) = (
                baseline.get("metrics").and_then(Value::as_object),
                current.get("metrics").and_then(Value::as_object),
            ) else {
                return comparisons;
            };
            for name in baseline_metrics.keys() {
                // the full extractor runs here, so a summary entry can
                // shadow a metrics entry of the same name
                if let (Some(baseline_ratio), Some(current_ratio)) =
                    (metric_ratio(baseline, name), metric_ratio(current, name))
                {
                    comparisons.insert(
                        name.clone(),
                        MetricComparison::new(baseline_ratio, current_ratio),
                    );
                }
            }
        }
    }

    comparisons
}
