#![no_main]

use libfuzzer_sys::fuzz_target;

use bidcalc_core::{evaluate, CoefficientGrid, EvaluationRequest, TrimPolicy};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First two bytes pick the bands, the rest are bids in cents
    let policy = TrimPolicy::Banded {
        low_percent: u32::from(data[0] % 60),
        high_percent: u32::from(data[1] % 60),
    };
    let bids: Vec<f64> = data[2..]
        .iter()
        .map(|b| f64::from(*b) / 100.0)
        .collect();

    let request = EvaluationRequest {
        bids: bids.clone(),
        policy,
        grid: CoefficientGrid::default(),
        ..EvaluationRequest::default()
    };

    if let Ok(report) = evaluate(&request) {
        let lo = bids.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = bids.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(report.reference.value >= lo - 1e-9 && report.reference.value <= hi + 1e-9);
        assert_eq!(report.rows.len(), 35);
        assert_eq!(evaluate(&request).ok(), Some(report));
    }
});
