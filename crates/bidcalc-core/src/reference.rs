//! Reference price (A) selection.

use serde::{Deserialize, Serialize};

use crate::constants::{DROP_HIGHEST_MIN_BIDS, TRIM_MIN_BIDS};
use crate::error::BidError;
use crate::policy::TrimPolicy;

/// The reference price together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePrice {
    /// Reference price A.
    pub value: f64,
    /// Human-readable description of the rule that fired.
    pub description: String,
}

/// Select the reference price A from the bids.
///
/// * n >= 7: mean of the bids left after the policy's low/high cuts.
/// * 4 <= n < 7: mean of all bids except the highest.
/// * 2 <= n < 4: the second-lowest bid.
/// * n = 1: the sole bid.
pub fn select_reference_price(
    bids: &[f64],
    policy: &TrimPolicy,
) -> Result<ReferencePrice, BidError> {
    policy.validate()?;

    let mut sorted = bids.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();

    let reference = if n >= TRIM_MIN_BIDS {
        let (low, high) = policy.cuts(n);
        if low + high >= n {
            return Err(BidError::InvalidParameters(format!(
                "{policy} removes {low} low and {high} high bids, leaving none of {n}"
            )));
        }
        let kept = &sorted[low..n - high];
        ReferencePrice {
            value: mean(kept),
            description: format!(
                "{n} bids, {policy}: removed {low} lowest and {high} highest, averaged the remaining {}",
                kept.len()
            ),
        }
    } else if n >= DROP_HIGHEST_MIN_BIDS {
        ReferencePrice {
            value: mean(&sorted[..n - 1]),
            description: format!(
                "{n} bids: removed the highest, averaged the remaining {}",
                n - 1
            ),
        }
    } else if n >= 2 {
        ReferencePrice {
            value: sorted[1],
            description: format!("{n} bids: took the second-lowest bid"),
        }
    } else if n == 1 {
        ReferencePrice {
            value: sorted[0],
            description: "1 bid: took the sole bid".to_string(),
        }
    } else {
        return Err(BidError::EmptyBidSet);
    };

    tracing::debug!(n, a = reference.value, "{}", reference.description);
    Ok(reference)
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
