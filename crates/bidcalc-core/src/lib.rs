//! # bidcalc-core
//!
//! Benchmark-price engine for tender bid evaluation.
//!
//! The engine selects a reference price A from the bids with a trim policy,
//! resolves the control price B, and evaluates
//! `A x K1 x Q1 + B x K2 x (1 - Q1)` over every (Q1, K1) pair.

pub mod constants;
pub mod control;
pub mod engine;
pub mod error;
pub mod interfaces;
pub mod parse;
pub mod policy;
pub mod reference;
pub mod stats;
pub mod table;

// Re-exports
pub use constants::{exit_codes, DEFAULT_HISTOGRAM_BINS, DEFAULT_K1S, DEFAULT_K2, DEFAULT_Q1S};
pub use control::{resolve_control_price, ControlPrice, ControlSource};
pub use engine::{evaluate, EvaluationReport, EvaluationRequest};
pub use error::BidError;
pub use interfaces::ReportPresenter;
pub use policy::TrimPolicy;
pub use reference::{select_reference_price, ReferencePrice};
pub use stats::{clamp_bins, BoxSummary, Histogram, HistogramBin};
pub use table::{compute_benchmark_table, round6, BenchmarkRow, CoefficientGrid};

/// Evaluate the default grid for a bid list with default parameters.
///
/// For custom policies, coefficients or control price, build an
/// [`EvaluationRequest`] and call [`evaluate`].
///
/// # Example
/// ```
/// let report = bidcalc_core::benchmark(&[0.95, 0.93]).unwrap();
/// assert_eq!(report.rows.len(), 35);
/// assert!((report.reference.value - 0.95).abs() < 1e-12);
/// ```
pub fn benchmark(bids: &[f64]) -> Result<EvaluationReport, BidError> {
    evaluate(&EvaluationRequest::with_bids(bids.to_vec()))
}
