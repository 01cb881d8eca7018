//! Presentation interfaces.

use crate::engine::EvaluationReport;
use crate::error::BidError;

/// Trait for presenting evaluation results to the user.
///
/// Status-only front ends (the dashboard log) implement just the warning
/// and error hooks; the report hooks default to doing nothing.
pub trait ReportPresenter {
    /// Present the bids as entered.
    fn present_bids(&self, _bids: &[f64]) {}

    /// Present a completed evaluation with the requested histogram bin count.
    fn present_report(&self, _report: &EvaluationReport, _bins: usize) {}

    /// Present a recoverable warning (e.g. grid defaults restored).
    fn present_warning(&self, warning: &BidError);

    /// Present an error that stopped the evaluation.
    fn present_error(&self, error: &BidError);
}
