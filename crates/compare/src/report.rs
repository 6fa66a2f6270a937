//! Fixed-width table rendering for comparison results.

use crate::comparison::ComparisonSet;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// Render a comparison set as a fixed-width text table.
///
/// Each row is prefixed with `+` when the metric improved, `-` when it
/// dropped, and a space when it is unchanged. Ratios are printed with 3
/// decimal places; a non-zero percent change is appended to the change
/// column.
pub fn render(comparisons: &ComparisonSet) -> String {
    let mut output = String::new();

    writeln!(output).unwrap();
    writeln!(output, "Benchmark Comparison Results").unwrap();
    writeln!(output, "{}", "=".repeat(RULE_WIDTH)).unwrap();
    writeln!(
        output,
        "{:<25} {:>10} {:>10} {:>10}",
        "Metric", "Baseline", "Current", "Change"
    )
    .unwrap();
    writeln!(output, "{}", "-".repeat(RULE_WIDTH)).unwrap();

    for (name, comparison) in comparisons.iter() {
        let mut change = format!("{:+.3}", comparison.change);
        if comparison.change_pct != 0.0 {
            write!(change, " ({:+.1}%)", comparison.change_pct).unwrap();
        }

        let marker = if comparison.improved {
            '+'
        } else if comparison.change < 0.0 {
            '-'
        } else {
            ' '
        };

        writeln!(
            output,
            "{} {:<23} {:>10.3} {:>10.3} {:>10}",
            marker, name, comparison.baseline, comparison.current, change
        )
        .unwrap();
    }

    writeln!(output, "{}", "-".repeat(RULE_WIDTH)).unwrap();

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::MetricComparison;

    fn set_of(entries: &[(&str, f64, f64)]) -> ComparisonSet {
        let mut comparisons = ComparisonSet::new();
        for (name, baseline, current) in entries {
            comparisons.insert(*name, MetricComparison::new(*baseline, *current));
        }
        comparisons
    }

    #[test]
    fn test_render_has_title_and_column_header() {
        let table = render(&set_of(&[("Throughput", 2.0, 1.8)]));
        assert!(table.starts_with('\n'));
        assert!(table.contains("Benchmark Comparison Results"));
        assert!(table.contains("Metric"));
        assert!(table.contains("Baseline"));
        assert!(table.contains("Current"));
        assert!(table.contains("Change"));
        assert!(table.contains(&"=".repeat(60)));
    }

    #[test]
    fn test_regressed_row_marker_and_percent() {
        let table = render(&set_of(&[("Throughput", 2.0, 1.8)]));
        let row = table
            .lines()
            .find(|line| line.contains("Throughput"))
            .unwrap();
        assert!(row.starts_with('-'));
        assert!(row.contains("2.000"));
        assert!(row.contains("1.800"));
        assert!(row.contains("-0.200 (-10.0%)"));
    }

    #[test]
    fn test_improved_row_marker() {
        let table = render(&set_of(&[("Safety", 1.5, 1.6)]));
        let row = table.lines().find(|line| line.contains("Safety")).unwrap();
        assert!(row.starts_with('+'));
        assert!(row.contains("+0.100 (+6.7%)"));
    }

    #[test]
    fn test_flat_row_has_blank_marker_and_no_percent() {
        let table = render(&set_of(&[("Latency", 1.0, 1.0)]));
        let row = table.lines().find(|line| line.contains("Latency")).unwrap();
        assert!(row.starts_with(' '));
        assert!(row.contains("+0.000"));
        assert!(!row.contains('%'));
    }

    #[test]
    fn test_zero_baseline_change_omits_percent() {
        let table = render(&set_of(&[("Latency", 0.0, 3.0)]));
        let row = table.lines().find(|line| line.contains("Latency")).unwrap();
        assert!(row.contains("+3.000"));
        assert!(!row.contains('%'));
    }

    #[test]
    fn test_rows_follow_set_order() {
        let table = render(&set_of(&[("Zeta", 1.0, 1.0), ("Alpha", 1.0, 1.0)]));
        let zeta = table.find("Zeta").unwrap();
        let alpha = table.find("Alpha").unwrap();
        assert!(zeta < alpha);
    }
}
