//! Benchmark table over the Q1 x K1 coefficient grid.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_K1S, DEFAULT_Q1S, REPORT_DECIMALS};
use crate::error::BidError;

/// The two coefficient lists evaluated as a Cartesian product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientGrid {
    /// Price weights, iterated in the outer loop.
    pub q1s: Vec<f64>,
    /// Downward float coefficients, iterated in the inner loop.
    pub k1s: Vec<f64>,
}

impl Default for CoefficientGrid {
    fn default() -> Self {
        Self {
            q1s: DEFAULT_Q1S.to_vec(),
            k1s: DEFAULT_K1S.to_vec(),
        }
    }
}

impl CoefficientGrid {
    #[must_use]
    pub fn new(q1s: Vec<f64>, k1s: Vec<f64>) -> Self {
        Self { q1s, k1s }
    }

    /// Number of rows the grid produces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.q1s.len() * self.k1s.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One evaluated combination of coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub a: f64,
    pub q1: f64,
    pub k1: f64,
    pub b: f64,
    pub k2: f64,
    /// `1 - q1`.
    pub q2: f64,
    /// `a*k1*q1 + b*k2*q2`.
    pub benchmark: f64,
}

impl BenchmarkRow {
    /// Copy of the row with `a`, `q2` and `benchmark` rounded for reporting.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            a: round6(self.a),
            q2: round6(self.q2),
            benchmark: round6(self.benchmark),
            ..*self
        }
    }
}

/// Evaluate `A*K1*Q1 + B*K2*(1-Q1)` for every (Q1, K1) pair.
///
/// Rows follow the grid order: Q1 outer, K1 inner.
pub fn compute_benchmark_table(
    a: f64,
    b: f64,
    k2: f64,
    q1s: &[f64],
    k1s: &[f64],
) -> Result<Vec<BenchmarkRow>, BidError> {
    if q1s.is_empty() {
        return Err(BidError::EmptyGrid("Q1"));
    }
    if k1s.is_empty() {
        return Err(BidError::EmptyGrid("K1"));
    }

    let rows = q1s
        .iter()
        .flat_map(|&q1| {
            k1s.iter().map(move |&k1| {
                let q2 = 1.0 - q1;
                BenchmarkRow {
                    a,
                    q1,
                    k1,
                    b,
                    k2,
                    q2,
                    benchmark: a * k1 * q1 + b * k2 * q2,
                }
            })
        })
        .collect();
    Ok(rows)
}

/// Round to the reporting precision (6 decimals).
#[must_use]
pub fn round6(value: f64) -> f64 {
    let scale = 10f64.powi(REPORT_DECIMALS);
    (value * scale).round() / scale
}
