#![no_main]

use libfuzzer_sys::fuzz_target;

use bidcalc_core::parse::{join_number_list, parse_bids, parse_grid};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(bids) = parse_bids(text) {
        assert!(bids.iter().all(|b| b.is_finite()));
        // Accepted lists survive a round trip through their text form
        assert_eq!(parse_bids(&join_number_list(&bids)).ok(), Some(bids));
    }

    let (q1, k1) = text.split_once(';').unwrap_or((text, ""));
    let parsed = parse_grid(q1, k1);
    if parsed.warning.is_some() {
        assert_eq!(parsed.grid, bidcalc_core::CoefficientGrid::default());
    }
});
