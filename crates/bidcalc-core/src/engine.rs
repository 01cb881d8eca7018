//! Benchmark engine: one immutable request in, one report out.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_K2;
use crate::control::{resolve_control_price, ControlPrice, ControlSource};
use crate::error::BidError;
use crate::policy::TrimPolicy;
use crate::reference::{select_reference_price, ReferencePrice};
use crate::stats::{BoxSummary, Histogram};
use crate::table::{compute_benchmark_table, round6, BenchmarkRow, CoefficientGrid};

/// Snapshot of every parameter needed for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub bids: Vec<f64>,
    pub policy: TrimPolicy,
    pub k2: f64,
    pub grid: CoefficientGrid,
    pub control: ControlSource,
}

impl Default for EvaluationRequest {
    fn default() -> Self {
        Self {
            bids: Vec::new(),
            policy: TrimPolicy::default(),
            k2: DEFAULT_K2,
            grid: CoefficientGrid::default(),
            control: ControlSource::default(),
        }
    }
}

impl EvaluationRequest {
    /// Request with the given bids and default everything else.
    #[must_use]
    pub fn with_bids(bids: Vec<f64>) -> Self {
        Self {
            bids,
            ..Self::default()
        }
    }
}

/// Result of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub reference: ReferencePrice,
    pub control: ControlPrice,
    pub rows: Vec<BenchmarkRow>,
}

impl EvaluationReport {
    /// Box-plot summary of the benchmark column.
    #[must_use]
    pub fn summary(&self) -> Option<BoxSummary> {
        BoxSummary::from_rows(&self.rows)
    }

    /// Histogram of the benchmark column with a clamped bin count.
    #[must_use]
    pub fn histogram(&self, bins: usize) -> Histogram {
        Histogram::from_rows(&self.rows, bins)
    }

    /// Rows rounded for reporting.
    #[must_use]
    pub fn rounded_rows(&self) -> Vec<BenchmarkRow> {
        self.rows.iter().map(BenchmarkRow::rounded).collect()
    }

    /// Pretty JSON form of the report with A and the rows rounded.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let rounded = Self {
            reference: ReferencePrice {
                value: round6(self.reference.value),
                ..self.reference.clone()
            },
            control: self.control.clone(),
            rows: self.rounded_rows(),
        };
        serde_json::to_string_pretty(&rounded)
    }
}

/// Evaluate the benchmark table for a request.
///
/// Pure function of its input: identical requests yield bit-identical
/// reports.
pub fn evaluate(request: &EvaluationRequest) -> Result<EvaluationReport, BidError> {
    if !request.k2.is_finite() {
        return Err(BidError::InvalidParameters(format!(
            "K2 must be a finite number (got {})",
            request.k2
        )));
    }

    let reference = select_reference_price(&request.bids, &request.policy)?;
    let control = resolve_control_price(request.control)?;
    let rows = compute_benchmark_table(
        reference.value,
        control.value,
        request.k2,
        &request.grid.q1s,
        &request.grid.k1s,
    )?;

    tracing::debug!(
        bids = request.bids.len(),
        rows = rows.len(),
        a = reference.value,
        b = control.value,
        "benchmark table evaluated"
    );

    Ok(EvaluationReport {
        reference,
        control,
        rows,
    })
}
