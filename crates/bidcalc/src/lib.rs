//! Application logic for the bidcalc benchmark-price calculator.

pub mod app;
pub mod config;
pub mod errors;
