//! CLI output formatting and export.

use std::fmt::Write as _;
use std::path::Path;

use bidcalc_core::stats::{BoxSummary, Histogram};
use bidcalc_core::table::BenchmarkRow;
use bidcalc_core::EvaluationReport;

/// Formula shown above the results.
pub const FORMULA: &str = "Benchmark = A x K1 x Q1 + B x K2 x (1-Q1)";

/// Width of the longest histogram bar in characters.
pub const HISTOGRAM_BAR_WIDTH: usize = 40;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables and charts.
    #[default]
    Table,
    /// Comma-separated rows.
    Csv,
    /// JSON report.
    Json,
}

/// Errors raised while exporting a report.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Format a price with the reporting precision.
#[must_use]
pub fn format_price(value: f64) -> String {
    format!("{value:.6}")
}

/// Bids as entered, highest first, with a 1-based index.
#[must_use]
pub fn format_bids(bids: &[f64]) -> String {
    let mut sorted = bids.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:>14}", "#", "Bid");
    for (i, bid) in sorted.iter().enumerate() {
        let _ = writeln!(out, "{:>4}  {:>14}", i + 1, bid);
    }
    out
}

/// Detailed result table with a 1-based index.
#[must_use]
pub fn format_rows(rows: &[BenchmarkRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:>10} {:>6} {:>6} {:>8} {:>6} {:>10} {:>10}",
        "#", "A", "Q1", "K1", "B", "K2", "1-Q1", "benchmark"
    );
    let _ = writeln!(out, "{:-<72}", "");
    for (i, row) in rows.iter().map(BenchmarkRow::rounded).enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:>10.6} {:>6} {:>6} {:>8} {:>6} {:>10.6} {:>10.6}",
            i + 1,
            row.a,
            row.q1,
            row.k1,
            row.b,
            row.k2,
            row.q2,
            row.benchmark
        );
    }
    out
}

/// Box-plot summary lines.
#[must_use]
pub fn format_summary(summary: &BoxSummary) -> String {
    let labels = ["min", "25%", "median", "75%", "max"];
    let mut out = String::new();
    for (label, value) in labels.iter().zip(summary.values()) {
        let _ = writeln!(out, "  {label:<7} {}", format_price(value));
    }
    out
}

/// Horizontal text histogram, one line per bin.
#[must_use]
pub fn format_histogram(histogram: &Histogram) -> String {
    let max = histogram.max_count().max(1);
    let mut out = String::new();
    for bin in &histogram.bins {
        let len = bin.count * HISTOGRAM_BAR_WIDTH / max;
        let _ = writeln!(
            out,
            "  {} - {} | {:<width$} {}",
            format_price(bin.start),
            format_price(bin.end),
            "#".repeat(len),
            bin.count,
            width = HISTOGRAM_BAR_WIDTH
        );
    }
    out
}

/// CSV form of the rounded rows.
#[must_use]
pub fn rows_to_csv(rows: &[BenchmarkRow]) -> String {
    let mut out = String::from("index,A,Q1,K1,B,K2,1-Q1,benchmark\n");
    for (i, row) in rows.iter().map(BenchmarkRow::rounded).enumerate() {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            i + 1,
            row.a,
            row.q1,
            row.k1,
            row.b,
            row.k2,
            row.q2,
            row.benchmark
        );
    }
    out
}

/// Render the report in a machine-readable format.
pub fn render_export(report: &EvaluationReport, format: OutputFormat) -> Result<String, ExportError> {
    match format {
        OutputFormat::Json => Ok(report.to_json_pretty()?),
        OutputFormat::Csv | OutputFormat::Table => Ok(rows_to_csv(&report.rows)),
    }
}

/// Write the report to a file. Table format is written as CSV.
pub fn write_to_file(
    path: &Path,
    report: &EvaluationReport,
    format: OutputFormat,
) -> Result<(), ExportError> {
    let content = render_export(report, format)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidcalc_core::{evaluate, CoefficientGrid, EvaluationRequest};

    fn single_row_report() -> EvaluationReport {
        let request = EvaluationRequest {
            grid: CoefficientGrid::new(vec![0.85], vec![0.95]),
            ..EvaluationRequest::with_bids(vec![1.0])
        };
        evaluate(&request).unwrap()
    }

    #[test]
    fn format_price_six_decimals() {
        assert_eq!(format_price(0.947), "0.947000");
        assert_eq!(format_price(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn bids_highest_first() {
        let s = format_bids(&[3.0, 5.0, 4.0]);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].trim_start().starts_with('1'));
        assert!(lines[1].ends_with('5'));
        assert!(lines[3].ends_with('3'));
    }

    #[test]
    fn rows_table_rounds() {
        let s = format_rows(&single_row_report().rows);
        assert!(s.contains("0.947000"));
        assert!(s.contains("0.150000"));
        assert!(s.contains("benchmark"));
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = rows_to_csv(&single_row_report().rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("index,A,Q1,K1,B,K2,1-Q1,benchmark"));
        assert_eq!(lines.next(), Some("1,1,0.85,0.95,1,0.93,0.15,0.947"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn histogram_lines_per_bin() {
        let h = Histogram::from_values(&[0.9, 0.95, 1.0, 1.0], 2);
        let s = format_histogram(&h);
        assert_eq!(s.lines().count(), 2);
        assert!(s.contains(&"#".repeat(HISTOGRAM_BAR_WIDTH)));
    }

    #[test]
    fn summary_lines() {
        let s = format_summary(&BoxSummary::from_values(&[1.0, 2.0, 3.0]).unwrap());
        assert_eq!(s.lines().count(), 5);
        assert!(s.contains("median  2.000000"));
    }

    #[test]
    fn json_export() {
        let json = render_export(&single_row_report(), OutputFormat::Json).unwrap();
        assert!(json.contains("\"benchmark\": 0.947"));
    }

    #[test]
    fn write_csv_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        write_to_file(&path, &single_row_report(), OutputFormat::Csv).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("index,"));
    }
}
