//! Control price (B) selection.

use serde::{Deserialize, Serialize};

use crate::constants::CONTROL_PRICE;
use crate::error::BidError;

/// Where B comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ControlSource {
    /// The tender control price, fixed at 1.0.
    #[default]
    ControlPrice,
    /// A user-supplied maximum bid ceiling.
    CustomCeiling(f64),
}

/// The control price together with its source description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPrice {
    /// Control price B.
    pub value: f64,
    /// Human-readable description of the source.
    pub description: String,
}

/// Resolve B from the explicit source selection.
pub fn resolve_control_price(source: ControlSource) -> Result<ControlPrice, BidError> {
    match source {
        ControlSource::ControlPrice => Ok(ControlPrice {
            value: CONTROL_PRICE,
            description: format!("control price ({CONTROL_PRICE})"),
        }),
        ControlSource::CustomCeiling(value) if value.is_finite() => Ok(ControlPrice {
            value,
            description: format!("custom bid ceiling ({value})"),
        }),
        ControlSource::CustomCeiling(value) => Err(BidError::InvalidParameters(format!(
            "bid ceiling must be a finite number (got {value})"
        ))),
    }
}
