//! Default coefficients, policy bounds and exit codes.

/// Default Q1 (price weight) grid.
pub const DEFAULT_Q1S: [f64; 5] = [0.85, 0.80, 0.75, 0.70, 0.65];

/// Default K1 (downward float) grid.
pub const DEFAULT_K1S: [f64; 7] = [0.95, 0.96, 0.97, 0.98, 0.99, 1.00, 1.01];

/// Default K2 coefficient applied to the control price.
pub const DEFAULT_K2: f64 = 0.93;

/// Fixed control price used when no custom ceiling is selected.
pub const CONTROL_PRICE: f64 = 1.0;

/// Default low-side trim percentage (G1).
pub const DEFAULT_G1_PERCENT: u32 = 15;

/// Default high-side trim percentage (G2).
pub const DEFAULT_G2_PERCENT: u32 = 15;

/// Largest accepted trim percentage on either side.
pub const MAX_TRIM_PERCENT: u32 = 49;

/// Trim percentage applied on both sides by the fixed policy.
pub const FIXED_TRIM_PERCENT: u32 = 20;

/// Bid count from which the percentage trim applies.
pub const TRIM_MIN_BIDS: usize = 7;

/// Bid count from which the single highest bid is dropped.
pub const DROP_HIGHEST_MIN_BIDS: usize = 4;

/// Default histogram bin count before clamping to the row count.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// Decimal places used when reporting prices.
pub const REPORT_DECIMALS: i32 = 6;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, terminal).
    pub const ERROR_GENERIC: i32 = 1;
    /// A numeric field could not be parsed.
    pub const ERROR_INPUT: i32 = 2;
    /// No bids were entered.
    pub const ERROR_EMPTY: i32 = 3;
    /// Invalid trim parameters or coefficient grid.
    pub const ERROR_CONFIG: i32 = 4;
}
