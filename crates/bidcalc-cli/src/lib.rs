//! # bidcalc-cli
//!
//! One-shot report rendering: styled sections, text histogram, detailed
//! table, and CSV/JSON export.

pub mod output;
pub mod presenter;
pub mod ui;

pub use output::{ExportError, OutputFormat};
pub use presenter::CliReportPresenter;
