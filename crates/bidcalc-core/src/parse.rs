//! Comma-separated numeric input parsing.
//!
//! Bid lists are strict: any bad token blocks the computation. Coefficient
//! grids are lenient: a bad token in either list restores both defaults and
//! the parse error is handed back as a warning.

use crate::error::BidError;
use crate::table::CoefficientGrid;

/// Field label used for the bid list in parse errors.
pub const BIDS_FIELD: &str = "bids";
/// Field label used for the Q1 list in parse errors.
pub const Q1_FIELD: &str = "Q1";
/// Field label used for the K1 list in parse errors.
pub const K1_FIELD: &str = "K1";

/// Parse a comma-separated list of finite numbers.
///
/// Blank input yields an empty list. Tokens are trimmed; an empty token
/// (`"1,,2"`) or a non-finite value (`"inf"`, `"nan"`) is rejected.
pub fn parse_number_list(field: &'static str, text: &str) -> Result<Vec<f64>, BidError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|raw| {
            let token = raw.trim();
            match token.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(BidError::Parse {
                    field,
                    token: token.to_string(),
                }),
            }
        })
        .collect()
}

/// Parse the bid list. Emptiness is left for the engine to report.
pub fn parse_bids(text: &str) -> Result<Vec<f64>, BidError> {
    parse_number_list(BIDS_FIELD, text)
}

/// Result of parsing the two coefficient lists.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGrid {
    /// The grid to evaluate: parsed values or the defaults.
    pub grid: CoefficientGrid,
    /// Set when parsing failed and the defaults were substituted.
    pub warning: Option<BidError>,
}

/// Parse the Q1 and K1 lists, falling back to the default grid on failure.
pub fn parse_grid(q1_text: &str, k1_text: &str) -> ParsedGrid {
    let parsed = parse_number_list(Q1_FIELD, q1_text)
        .and_then(|q1s| parse_number_list(K1_FIELD, k1_text).map(|k1s| (q1s, k1s)));

    match parsed {
        Ok((q1s, k1s)) => ParsedGrid {
            grid: CoefficientGrid::new(q1s, k1s),
            warning: None,
        },
        Err(err) => {
            tracing::debug!("coefficient grid rejected, using defaults: {err}");
            ParsedGrid {
                grid: CoefficientGrid::default(),
                warning: Some(err),
            }
        }
    }
}

/// Render a list back into the comma-separated form accepted by the parser.
#[must_use]
pub fn join_number_list(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
