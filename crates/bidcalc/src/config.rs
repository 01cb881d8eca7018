//! Application configuration from CLI flags, environment and parameter file.
//!
//! Precedence per parameter: command line (or `BIDCALC_*` variable), then
//! the JSON parameter file, then the built-in defaults.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use serde::Deserialize;

use bidcalc_cli::OutputFormat;
use bidcalc_core::parse::{join_number_list, parse_bids, parse_grid};
use bidcalc_core::{
    BidError, ControlSource, EvaluationRequest, TrimPolicy, DEFAULT_HISTOGRAM_BINS, DEFAULT_K1S,
    DEFAULT_K2, DEFAULT_Q1S,
};

/// Trim policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Fixed 20% trim on each side.
    Fixed,
    /// G1% lowest and G2% highest trimmed.
    Banded,
}

/// Compute the benchmark price for tender bid evaluation.
#[derive(Parser, Debug)]
#[command(name = "bidcalc", version, about)]
pub struct AppConfig {
    /// Comma-separated bids, e.g. "0.95,0.93,0.97".
    #[arg(short, long, env = "BIDCALC_BIDS", allow_hyphen_values = true)]
    pub bids: Option<String>,

    /// Comma-separated Q1 coefficients.
    #[arg(long, env = "BIDCALC_Q1")]
    pub q1: Option<String>,

    /// Comma-separated K1 coefficients.
    #[arg(long, env = "BIDCALC_K1")]
    pub k1: Option<String>,

    /// K2 coefficient [default: 0.93].
    #[arg(long, env = "BIDCALC_K2")]
    pub k2: Option<f64>,

    /// Percentage of lowest bids trimmed when at least 7 bids [default: 15].
    #[arg(long, env = "BIDCALC_G1")]
    pub g1: Option<u32>,

    /// Percentage of highest bids trimmed when at least 7 bids [default: 15].
    #[arg(long, env = "BIDCALC_G2")]
    pub g2: Option<u32>,

    /// Trim policy [default: banded].
    #[arg(long, value_enum, env = "BIDCALC_POLICY")]
    pub policy: Option<PolicyKind>,

    /// Use a custom bid ceiling as B instead of the control price.
    #[arg(long, env = "BIDCALC_CEILING", allow_hyphen_values = true)]
    pub ceiling: Option<f64>,

    /// Histogram bin count [default: 30].
    #[arg(long, env = "BIDCALC_BINS")]
    pub bins: Option<usize>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write the report to a file (CSV or JSON).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON parameter file.
    #[arg(long, env = "BIDCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Quiet mode (only output the benchmark column).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Parameters read from a JSON file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamFile {
    pub bids: Option<Vec<f64>>,
    pub q1: Option<Vec<f64>>,
    pub k1: Option<Vec<f64>>,
    pub k2: Option<f64>,
    pub g1: Option<u32>,
    pub g2: Option<u32>,
    pub policy: Option<PolicyKind>,
    pub ceiling: Option<f64>,
    pub bins: Option<usize>,
}

/// Errors loading the parameter file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read parameter file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid parameter file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ParamFile {
    /// Load a parameter file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "parameter file loaded");
        Ok(file)
    }
}

/// Everything but the bids, merged from all sources.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    /// Request with an empty bid list.
    pub request: EvaluationRequest,
    /// Histogram bin count.
    pub bins: usize,
    /// Recoverable problems (coefficient defaults restored).
    pub warnings: Vec<BidError>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Write a completion script for `shell`.
    pub fn write_completion(shell: clap_complete::Shell, out: &mut dyn std::io::Write) {
        let mut cmd = Self::command();
        clap_complete::generate(shell, &mut cmd, "bidcalc", out);
    }

    /// Load the parameter file, or an empty one when none is given.
    pub fn param_file(&self) -> Result<ParamFile, ConfigError> {
        self.config
            .as_deref()
            .map_or_else(|| Ok(ParamFile::default()), ParamFile::load)
    }

    /// Raw bid text from the command line or the file.
    #[must_use]
    pub fn bid_text(&self, file: &ParamFile) -> String {
        match (&self.bids, &file.bids) {
            (Some(text), _) => text.clone(),
            (None, Some(bids)) => join_number_list(bids),
            (None, None) => String::new(),
        }
    }

    /// Parsed bids. An empty list is left for the engine to reject.
    pub fn bids(&self, file: &ParamFile) -> Result<Vec<f64>, BidError> {
        match (&self.bids, &file.bids) {
            (Some(text), _) => parse_bids(text),
            (None, Some(bids)) => Ok(bids.clone()),
            (None, None) => Ok(Vec::new()),
        }
    }

    /// Merge every non-bid parameter.
    #[must_use]
    pub fn parameters(&self, file: &ParamFile) -> Parameters {
        let q1_text = self
            .q1
            .clone()
            .unwrap_or_else(|| join_number_list(file.q1.as_deref().unwrap_or(&DEFAULT_Q1S)));
        let k1_text = self
            .k1
            .clone()
            .unwrap_or_else(|| join_number_list(file.k1.as_deref().unwrap_or(&DEFAULT_K1S)));
        let parsed = parse_grid(&q1_text, &k1_text);

        let request = EvaluationRequest {
            bids: Vec::new(),
            policy: self.policy(file),
            k2: self.k2.or(file.k2).unwrap_or(DEFAULT_K2),
            grid: parsed.grid,
            control: self
                .ceiling
                .or(file.ceiling)
                .map_or(ControlSource::ControlPrice, ControlSource::CustomCeiling),
        };

        Parameters {
            request,
            bins: self.bins.or(file.bins).unwrap_or(DEFAULT_HISTOGRAM_BINS),
            warnings: parsed.warning.into_iter().collect(),
        }
    }

    fn policy(&self, file: &ParamFile) -> TrimPolicy {
        match self.policy.or(file.policy) {
            Some(PolicyKind::Fixed) => TrimPolicy::Fixed,
            Some(PolicyKind::Banded) | None => {
                let (g1, g2) = TrimPolicy::default().percents();
                TrimPolicy::Banded {
                    low_percent: self.g1.or(file.g1).unwrap_or(g1),
                    high_percent: self.g2.or(file.g2).unwrap_or(g2),
                }
            }
        }
    }
}
