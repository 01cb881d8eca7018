//! Editable parameter form and its translation into engine requests.
//!
//! The form holds raw text; every evaluation parses it into a fresh
//! [`EvaluationRequest`] so nothing carries over between computations.

use bidcalc_core::parse::{join_number_list, parse_bids, parse_grid};
use bidcalc_core::{
    evaluate, BidError, ControlSource, EvaluationReport, EvaluationRequest, TrimPolicy,
    DEFAULT_HISTOGRAM_BINS,
};

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Bids,
    Q1s,
    K1s,
    K2,
    Policy,
    G1,
    G2,
    Source,
    Ceiling,
    Bins,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Bids,
        Field::Q1s,
        Field::K1s,
        Field::K2,
        Field::Policy,
        Field::G1,
        Field::G2,
        Field::Source,
        Field::Ceiling,
        Field::Bins,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Bids => "Bids",
            Field::Q1s => "Q1 list",
            Field::K1s => "K1 list",
            Field::K2 => "K2",
            Field::Policy => "Trim policy",
            Field::G1 => "G1 low %",
            Field::G2 => "G2 high %",
            Field::Source => "B source",
            Field::Ceiling => "Bid ceiling",
            Field::Bins => "Histogram bins",
        }
    }

    /// Whether the field is a choice toggled with Left/Right.
    #[must_use]
    pub fn is_choice(self) -> bool {
        matches!(self, Field::Policy | Field::Source)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Outcome of evaluating the current form contents.
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    /// Parsed bids, empty when the bid field failed to parse.
    pub bids: Vec<f64>,
    /// Report, absent when the computation did not proceed.
    pub report: Option<EvaluationReport>,
    /// Histogram bin count requested by the form.
    pub bins: usize,
    /// Recoverable problems (defaults substituted).
    pub warnings: Vec<BidError>,
    /// Problem that stopped the computation.
    pub error: Option<BidError>,
}

/// Raw text of every parameter.
#[derive(Debug, Clone)]
pub struct FormState {
    pub bids: String,
    pub q1s: String,
    pub k1s: String,
    pub k2: String,
    pub fixed_policy: bool,
    pub g1: String,
    pub g2: String,
    pub custom_ceiling: bool,
    pub ceiling: String,
    pub bins: String,
    pub focus: Field,
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_request(&EvaluationRequest::default(), DEFAULT_HISTOGRAM_BINS)
    }
}

impl FormState {
    /// Pre-fill the form from a request.
    #[must_use]
    pub fn from_request(request: &EvaluationRequest, bins: usize) -> Self {
        let (g1, g2) = match request.policy {
            TrimPolicy::Fixed => TrimPolicy::default().percents(),
            TrimPolicy::Banded { .. } => request.policy.percents(),
        };
        let (custom_ceiling, ceiling) = match request.control {
            ControlSource::ControlPrice => (false, 1.0),
            ControlSource::CustomCeiling(v) => (true, v),
        };
        Self {
            bids: join_number_list(&request.bids),
            q1s: join_number_list(&request.grid.q1s),
            k1s: join_number_list(&request.grid.k1s),
            k2: request.k2.to_string(),
            fixed_policy: matches!(request.policy, TrimPolicy::Fixed),
            g1: g1.to_string(),
            g2: g2.to_string(),
            custom_ceiling,
            ceiling: ceiling.to_string(),
            bins: bins.to_string(),
            focus: Field::Bids,
        }
    }

    /// Display value of a field.
    #[must_use]
    pub fn display(&self, field: Field) -> String {
        match field {
            Field::Policy if self.fixed_policy => "fixed 20%".to_string(),
            Field::Policy => "G1/G2".to_string(),
            Field::Source if self.custom_ceiling => "custom bid ceiling".to_string(),
            Field::Source => "control price (1.0)".to_string(),
            _ => self.text(field).cloned().unwrap_or_default(),
        }
    }

    fn text(&self, field: Field) -> Option<&String> {
        match field {
            Field::Bids => Some(&self.bids),
            Field::Q1s => Some(&self.q1s),
            Field::K1s => Some(&self.k1s),
            Field::K2 => Some(&self.k2),
            Field::G1 => Some(&self.g1),
            Field::G2 => Some(&self.g2),
            Field::Ceiling => Some(&self.ceiling),
            Field::Bins => Some(&self.bins),
            Field::Policy | Field::Source => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Bids => Some(&mut self.bids),
            Field::Q1s => Some(&mut self.q1s),
            Field::K1s => Some(&mut self.k1s),
            Field::K2 => Some(&mut self.k2),
            Field::G1 => Some(&mut self.g1),
            Field::G2 => Some(&mut self.g2),
            Field::Ceiling => Some(&mut self.ceiling),
            Field::Bins => Some(&mut self.bins),
            Field::Policy | Field::Source => None,
        }
    }

    /// Whether a field currently affects the result.
    #[must_use]
    pub fn is_active(&self, field: Field) -> bool {
        match field {
            Field::G1 | Field::G2 => !self.fixed_policy,
            Field::Ceiling => self.custom_ceiling,
            _ => true,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused field. Returns whether it changed.
    pub fn insert(&mut self, c: char) -> bool {
        if let Some(text) = self.text_mut(self.focus) {
            text.push(c);
            true
        } else {
            false
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) -> bool {
        self.text_mut(self.focus)
            .is_some_and(|text| text.pop().is_some())
    }

    /// Empty the focused field.
    pub fn clear(&mut self) -> bool {
        match self.text_mut(self.focus) {
            Some(text) if !text.is_empty() => {
                text.clear();
                true
            }
            _ => false,
        }
    }

    /// Flip the focused choice field.
    pub fn toggle(&mut self) -> bool {
        match self.focus {
            Field::Policy => {
                self.fixed_policy = !self.fixed_policy;
                true
            }
            Field::Source => {
                self.custom_ceiling = !self.custom_ceiling;
                true
            }
            _ => false,
        }
    }

    /// Parse the form into a request and evaluate it.
    #[must_use]
    pub fn evaluate(&self) -> Evaluation {
        let mut outcome = Evaluation {
            bins: DEFAULT_HISTOGRAM_BINS,
            ..Evaluation::default()
        };

        match parse_count("bins", &self.bins) {
            Ok(bins) => outcome.bins = bins,
            Err(err) => outcome.warnings.push(err),
        }

        let parsed = parse_grid(&self.q1s, &self.k1s);
        if let Some(warning) = parsed.warning {
            outcome.warnings.push(warning);
        }

        let request = parse_bids(&self.bids).and_then(|bids| {
            outcome.bids.clone_from(&bids);
            Ok(EvaluationRequest {
                bids,
                policy: self.policy()?,
                k2: parse_scalar("K2", &self.k2)?,
                grid: parsed.grid,
                control: self.control()?,
            })
        });

        match request.and_then(|request| evaluate(&request)) {
            Ok(report) => outcome.report = Some(report),
            Err(err) => {
                tracing::debug!("evaluation stopped: {err}");
                outcome.error = Some(err);
            }
        }
        outcome
    }

    fn policy(&self) -> Result<TrimPolicy, BidError> {
        if self.fixed_policy {
            return Ok(TrimPolicy::Fixed);
        }
        Ok(TrimPolicy::Banded {
            low_percent: parse_percent("G1", &self.g1)?,
            high_percent: parse_percent("G2", &self.g2)?,
        })
    }

    fn control(&self) -> Result<ControlSource, BidError> {
        if self.custom_ceiling {
            Ok(ControlSource::CustomCeiling(parse_scalar(
                "ceiling",
                &self.ceiling,
            )?))
        } else {
            Ok(ControlSource::ControlPrice)
        }
    }
}

fn parse_error(field: &'static str, text: &str) -> BidError {
    BidError::Parse {
        field,
        token: text.trim().to_string(),
    }
}

fn parse_scalar(field: &'static str, text: &str) -> Result<f64, BidError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(parse_error(field, text)),
    }
}

fn parse_percent(field: &'static str, text: &str) -> Result<u32, BidError> {
    text.trim().parse().map_err(|_| parse_error(field, text))
}

fn parse_count(field: &'static str, text: &str) -> Result<usize, BidError> {
    text.trim().parse().map_err(|_| parse_error(field, text))
}
