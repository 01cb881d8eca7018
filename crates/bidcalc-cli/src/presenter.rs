//! CLI report presenter.

use bidcalc_core::{BidError, EvaluationReport, ReportPresenter};

use crate::output::{
    format_bids, format_histogram, format_price, format_rows, format_summary, FORMULA,
};
use crate::ui::{print_error, print_header, print_warning};

/// CLI report presenter.
pub struct CliReportPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliReportPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ReportPresenter for CliReportPresenter {
    fn present_bids(&self, bids: &[f64]) {
        if self.quiet {
            return;
        }
        print_header("Bids");
        print!("{}", format_bids(bids));
    }

    fn present_report(&self, report: &EvaluationReport, bins: usize) {
        if self.quiet {
            for row in report.rounded_rows() {
                println!("{}", format_price(row.benchmark));
            }
            return;
        }

        print_header(FORMULA);
        println!(
            "A = {}  [{}]",
            format_price(report.reference.value),
            report.reference.description
        );
        println!("B = {}  [{}]", report.control.value, report.control.description);

        if let Some(summary) = report.summary() {
            println!();
            print_header("Box plot");
            print!("{}", format_summary(&summary));
        }

        let histogram = report.histogram(bins);
        println!();
        print_header(&format!("Histogram ({} bins)", histogram.bins.len()));
        print!("{}", format_histogram(&histogram));

        println!();
        print_header("Detailed table");
        print!("{}", format_rows(&report.rows));

        if self.verbose {
            println!("\n{} rows evaluated", report.rows.len());
        }
    }

    fn present_warning(&self, warning: &BidError) {
        print_warning(&format!("{warning}; default Q1/K1 coefficients restored"));
    }

    fn present_error(&self, error: &BidError) {
        print_error(&error.to_string());
    }
}
