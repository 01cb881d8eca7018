//! # bidcalc-tui
//!
//! Interactive benchmark dashboard using ratatui with Elm architecture.
//! Every edit of the parameter form recomputes the report from scratch.

pub mod bridge;
pub mod chart;
pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod panel;
pub mod results;
pub mod styles;

pub use bridge::TuiReportPresenter;
pub use form::{Evaluation, Field, FormState};
pub use messages::TuiMessage;
pub use model::TuiApp;
