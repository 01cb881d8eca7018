//! Distribution of the benchmark column: box-plot summary and histogram.

use serde::{Deserialize, Serialize};

use crate::table::BenchmarkRow;

/// Five-number summary of the benchmark prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxSummary {
    /// Summarize the benchmark column. `None` when there are no rows.
    #[must_use]
    pub fn from_rows(rows: &[BenchmarkRow]) -> Option<Self> {
        Self::from_values(&benchmarks(rows))
    }

    /// Summarize arbitrary values, interpolating linearly between ranks.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Some(Self {
            min: sorted[0],
            q1: percentile_sorted(&sorted, 25.0),
            median: percentile_sorted(&sorted, 50.0),
            q3: percentile_sorted(&sorted, 75.0),
            max: sorted[sorted.len() - 1],
        })
    }

    /// The five values in ascending order.
    #[must_use]
    pub fn values(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn percentile_sorted(sorted: &[f64], percentile: f64) -> f64 {
    let rank = (percentile / 100.0) * (sorted.len() as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let w = rank - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * w
    }
}

/// One histogram bucket `[start, end)`; the last bucket also holds `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width histogram of the benchmark prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bucket the benchmark column into `requested` bins, clamped to
    /// `[1, rows.len()]`.
    #[must_use]
    pub fn from_rows(rows: &[BenchmarkRow], requested: usize) -> Self {
        let values = benchmarks(rows);
        Self::from_values(&values, clamp_bins(requested, values.len()))
    }

    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        clippy::float_cmp
    )]
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        if values.is_empty() || bins == 0 {
            return Self { bins: Vec::new() };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if min == max {
            return Self {
                bins: vec![HistogramBin {
                    start: min,
                    end: max,
                    count: values.len(),
                }],
            };
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for v in values {
            let idx = (((v - min) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: min + width * i as f64,
                end: if i + 1 == bins {
                    max
                } else {
                    min + width * (i + 1) as f64
                },
                count,
            })
            .collect();
        Self { bins }
    }

    /// Total number of values bucketed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bucket count.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Clamp a requested bin count to `[1, rows]`.
#[must_use]
pub fn clamp_bins(requested: usize, rows: usize) -> usize {
    requested.clamp(1, rows.max(1))
}

fn benchmarks(rows: &[BenchmarkRow]) -> Vec<f64> {
    rows.iter().map(|r| r.benchmark).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_empty_is_none() {
        assert!(BoxSummary::from_values(&[]).is_none());
    }

    #[test]
    fn summary_interpolates() {
        let s = BoxSummary::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!((s.min - 1.0).abs() < 1e-12);
        assert!((s.q1 - 1.75).abs() < 1e-12);
        assert!((s.median - 2.5).abs() < 1e-12);
        assert!((s.q3 - 3.25).abs() < 1e-12);
        assert!((s.max - 4.0).abs() < 1e-12);
    }

    #[test]
    fn summary_single_value() {
        let s = BoxSummary::from_values(&[0.947]).unwrap();
        assert!(s.values().iter().all(|v| (v - 0.947).abs() < 1e-12));
    }

    #[test]
    fn clamp_bins_bounds() {
        assert_eq!(clamp_bins(30, 35), 30);
        assert_eq!(clamp_bins(30, 5), 5);
        assert_eq!(clamp_bins(0, 5), 1);
        assert_eq!(clamp_bins(3, 0), 1);
    }

    #[test]
    fn histogram_counts_everything() {
        let values: Vec<f64> = (0..35).map(|i| f64::from(i) * 0.01).collect();
        let h = Histogram::from_values(&values, 7);
        assert_eq!(h.bins.len(), 7);
        assert_eq!(h.total(), 35);
        assert_eq!(h.max_count(), 5);
    }

    #[test]
    fn histogram_max_lands_in_last_bin() {
        let h = Histogram::from_values(&[0.0, 1.0], 2);
        assert_eq!(h.bins[0].count, 1);
        assert_eq!(h.bins[1].count, 1);
        assert!((h.bins[1].end - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn histogram_constant_values_single_bin() {
        let h = Histogram::from_values(&[2.0, 2.0, 2.0], 3);
        assert_eq!(h.bins.len(), 1);
        assert_eq!(h.bins[0].count, 3);
    }

    #[test]
    fn histogram_empty() {
        assert!(Histogram::from_values(&[], 5).bins.is_empty());
    }
}
