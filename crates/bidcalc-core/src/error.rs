//! Error type for the benchmark engine.

use crate::constants::exit_codes;

/// Errors raised while parsing input or evaluating the benchmark.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BidError {
    /// A numeric text field contains a token that is not a finite number.
    #[error("{field}: '{token}' is not a valid number")]
    Parse { field: &'static str, token: String },

    /// No bids were entered.
    #[error("no bids entered")]
    EmptyBidSet,

    /// Trim percentages or coefficients are out of range.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A coefficient list is empty.
    #[error("coefficient list {0} is empty")]
    EmptyGrid(&'static str),
}

impl BidError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Parse { .. } => exit_codes::ERROR_INPUT,
            Self::EmptyBidSet => exit_codes::ERROR_EMPTY,
            Self::InvalidParameters(_) | Self::EmptyGrid(_) => exit_codes::ERROR_CONFIG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BidError::Parse {
            field: "bids",
            token: "abc".into(),
        };
        assert_eq!(err.to_string(), "bids: 'abc' is not a valid number");

        assert_eq!(BidError::EmptyBidSet.to_string(), "no bids entered");
        assert_eq!(
            BidError::EmptyGrid("Q1").to_string(),
            "coefficient list Q1 is empty"
        );
    }

    #[test]
    fn error_codes() {
        assert_eq!(BidError::EmptyBidSet.exit_code(), 3);
        assert_eq!(BidError::InvalidParameters("x".into()).exit_code(), 4);
        assert_eq!(BidError::EmptyGrid("K1").exit_code(), 4);
        let err = BidError::Parse {
            field: "bids",
            token: "x".into(),
        };
        assert_eq!(err.exit_code(), 2);
    }
}
