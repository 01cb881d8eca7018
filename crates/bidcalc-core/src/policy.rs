//! Trim policies: which bids are excluded before averaging.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_G1_PERCENT, DEFAULT_G2_PERCENT, FIXED_TRIM_PERCENT, MAX_TRIM_PERCENT,
};
use crate::error::BidError;

/// Rule for excluding outlier bids when at least seven bids are entered.
///
/// Smaller bid sets are handled identically by every policy (see
/// [`crate::reference::select_reference_price`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrimPolicy {
    /// Remove 20% of the bids from each end.
    Fixed,
    /// Remove `low_percent` of the bids from the low end and `high_percent`
    /// from the high end (G1 and G2).
    Banded { low_percent: u32, high_percent: u32 },
}

impl Default for TrimPolicy {
    fn default() -> Self {
        Self::Banded {
            low_percent: DEFAULT_G1_PERCENT,
            high_percent: DEFAULT_G2_PERCENT,
        }
    }
}

impl TrimPolicy {
    /// Build a banded policy from G1/G2 percentages, validating them.
    pub fn banded(low_percent: u32, high_percent: u32) -> Result<Self, BidError> {
        let policy = Self::Banded {
            low_percent,
            high_percent,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Low and high trim percentages.
    #[must_use]
    pub fn percents(&self) -> (u32, u32) {
        match *self {
            Self::Fixed => (FIXED_TRIM_PERCENT, FIXED_TRIM_PERCENT),
            Self::Banded {
                low_percent,
                high_percent,
            } => (low_percent, high_percent),
        }
    }

    /// Check percentage bounds: each in `[0, 49]`, sum below 100.
    pub fn validate(&self) -> Result<(), BidError> {
        let (low, high) = self.percents();
        if low > MAX_TRIM_PERCENT || high > MAX_TRIM_PERCENT {
            return Err(BidError::InvalidParameters(format!(
                "G1 and G2 must each be between 0% and {MAX_TRIM_PERCENT}% (got G1={low}%, G2={high}%)"
            )));
        }
        if low + high >= 100 {
            return Err(BidError::InvalidParameters(format!(
                "G1 + G2 must stay below 100% (got {}%)",
                low + high
            )));
        }
        Ok(())
    }

    /// Number of bids removed from the low and high end of `n` sorted bids.
    #[must_use]
    pub fn cuts(&self, n: usize) -> (usize, usize) {
        let (low, high) = self.percents();
        (round_share(n, low), round_share(n, high))
    }
}

impl fmt::Display for TrimPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed {FIXED_TRIM_PERCENT}% trim"),
            Self::Banded {
                low_percent,
                high_percent,
            } => write!(f, "G1={low_percent}% / G2={high_percent}% trim"),
        }
    }
}

/// `round(n * percent / 100)` with ties to even, computed exactly.
fn round_share(n: usize, percent: u32) -> usize {
    let scaled = n * percent as usize;
    let quotient = scaled / 100;
    let remainder = scaled % 100;
    match remainder.cmp(&50) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + (quotient % 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fifteen_fifteen() {
        assert_eq!(TrimPolicy::default().percents(), (15, 15));
    }

    #[test]
    fn fixed_is_twenty_percent() {
        assert_eq!(TrimPolicy::Fixed.percents(), (20, 20));
        assert_eq!(TrimPolicy::Fixed.cuts(7), (1, 1));
        assert_eq!(TrimPolicy::Fixed.cuts(10), (2, 2));
        assert_eq!(TrimPolicy::Fixed.cuts(13), (3, 3));
    }

    #[test]
    fn cuts_round_half_to_even() {
        // 10 * 15% = 1.5 -> 2, 10 * 25% = 2.5 -> 2
        assert_eq!(round_share(10, 15), 2);
        assert_eq!(round_share(10, 25), 2);
        assert_eq!(round_share(10, 35), 4);
    }

    #[test]
    fn cuts_for_seven_bids() {
        assert_eq!(TrimPolicy::banded(15, 15).unwrap().cuts(7), (1, 1));
        assert_eq!(TrimPolicy::banded(40, 40).unwrap().cuts(7), (3, 3));
        assert_eq!(TrimPolicy::banded(45, 45).unwrap().cuts(7), (3, 3));
        assert_eq!(TrimPolicy::banded(0, 30).unwrap().cuts(7), (0, 2));
    }

    #[test]
    fn rejects_out_of_range_percent() {
        assert!(matches!(
            TrimPolicy::banded(50, 0),
            Err(BidError::InvalidParameters(_))
        ));
        assert!(TrimPolicy::banded(49, 49).is_ok());
    }

    #[test]
    fn rejects_sum_at_or_above_hundred() {
        let policy = TrimPolicy::Banded {
            low_percent: 60,
            high_percent: 40,
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(TrimPolicy::Fixed.to_string(), "fixed 20% trim");
        assert_eq!(TrimPolicy::default().to_string(), "G1=15% / G2=15% trim");
    }

    #[test]
    fn serde_tagged_form() {
        let json = serde_json::to_string(&TrimPolicy::Fixed).unwrap();
        assert_eq!(json, r#"{"kind":"fixed"}"#);
        let policy: TrimPolicy =
            serde_json::from_str(r#"{"kind":"banded","low_percent":10,"high_percent":5}"#)
                .unwrap();
        assert_eq!(policy.percents(), (10, 5));
    }
}
