//! Golden file integration tests.
//!
//! Reads tests/testdata/benchmark_golden.json and checks the engine against
//! scenarios with hand-computed answers.

use serde::Deserialize;

use bidcalc_core::{
    evaluate, select_reference_price, BidError, CoefficientGrid, ControlSource,
    EvaluationRequest, TrimPolicy, DEFAULT_K2,
};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    bids: Vec<f64>,
    #[serde(default)]
    policy: TrimPolicy,
    #[serde(default)]
    q1: Option<Vec<f64>>,
    #[serde(default)]
    k1: Option<Vec<f64>>,
    #[serde(default)]
    k2: Option<f64>,
    #[serde(default)]
    ceiling: Option<f64>,
    #[serde(default)]
    cuts: Option<(usize, usize)>,
    #[serde(default)]
    reference: Option<f64>,
    #[serde(default)]
    benchmarks: Option<Vec<f64>>,
    #[serde(default)]
    error: Option<String>,
}

impl Scenario {
    fn request(&self) -> EvaluationRequest {
        let defaults = CoefficientGrid::default();
        EvaluationRequest {
            bids: self.bids.clone(),
            policy: self.policy,
            k2: self.k2.unwrap_or(DEFAULT_K2),
            grid: CoefficientGrid::new(
                self.q1.clone().unwrap_or(defaults.q1s),
                self.k1.clone().unwrap_or(defaults.k1s),
            ),
            control: self
                .ceiling
                .map_or(ControlSource::ControlPrice, ControlSource::CustomCeiling),
        }
    }
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/benchmark_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn error_kind(err: &BidError) -> &'static str {
    match err {
        BidError::Parse { .. } => "parse",
        BidError::EmptyBidSet => "empty_bid_set",
        BidError::InvalidParameters(_) => "invalid_parameters",
        BidError::EmptyGrid(_) => "empty_grid",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_file_loads() {
    let data = load_golden_data();
    assert!(data.scenarios.len() >= 6);
}

#[test]
fn golden_cuts() {
    for scenario in load_golden_data().scenarios {
        if let Some(cuts) = scenario.cuts {
            assert_eq!(
                scenario.policy.cuts(scenario.bids.len()),
                cuts,
                "{}",
                scenario.name
            );
        }
    }
}

#[test]
fn golden_reference_prices() {
    for scenario in load_golden_data().scenarios {
        let result = select_reference_price(&scenario.bids, &scenario.policy);
        match (&scenario.reference, &scenario.error) {
            (Some(expected), _) => {
                let reference = result.unwrap_or_else(|e| panic!("{}: {e}", scenario.name));
                assert!(
                    (reference.value - expected).abs() < 1e-12,
                    "{}: A={} expected {expected}",
                    scenario.name,
                    reference.value
                );
            }
            (None, Some(kind)) => {
                let err = result.expect_err(&scenario.name);
                assert_eq!(error_kind(&err), kind, "{}", scenario.name);
            }
            (None, None) => panic!("{}: no expectation", scenario.name),
        }
    }
}

#[test]
fn golden_benchmarks() {
    for scenario in load_golden_data().scenarios {
        let Some(expected) = &scenario.benchmarks else {
            continue;
        };
        let report = evaluate(&scenario.request()).unwrap();
        let actual: Vec<f64> = report.rounded_rows().iter().map(|r| r.benchmark).collect();
        assert_eq!(actual.len(), expected.len(), "{}", scenario.name);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{}: {a} != {e}", scenario.name);
        }
    }
}

#[test]
fn golden_evaluate_matches_reference() {
    for scenario in load_golden_data().scenarios {
        let request = scenario.request();
        match evaluate(&request) {
            Ok(report) => {
                assert_eq!(
                    report.rows.len(),
                    request.grid.q1s.len() * request.grid.k1s.len(),
                    "{}",
                    scenario.name
                );
                for row in &report.rows {
                    assert_eq!(row.a.to_bits(), report.reference.value.to_bits());
                }
            }
            Err(err) => {
                assert_eq!(
                    Some(error_kind(&err)),
                    scenario.error.as_deref(),
                    "{}",
                    scenario.name
                );
            }
        }
    }
}

#[test]
fn golden_evaluation_is_repeatable() {
    for scenario in load_golden_data().scenarios {
        let request = scenario.request();
        assert_eq!(evaluate(&request), evaluate(&request), "{}", scenario.name);
    }
}
