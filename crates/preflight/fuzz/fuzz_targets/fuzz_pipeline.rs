//! Fuzz target for the preflight pipeline.
//!
//! Checks that reading, header resolution and classification:
//! 1. Never panic on malformed input
//! 2. Keep the summary counts consistent

#![no_main]

use libfuzzer_sys::fuzz_target;
use preflight::report::SAMPLE_LIMIT;
use preflight::{Preflight, PreflightConfig};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let preflight = Preflight::with_config(PreflightConfig::default().with_detail(true));
    if let Ok(report) = preflight.check_reader(data) {
        let s = &report.summary;
        assert!(s.importable_rows_name_and_price <= s.total_rows);
        assert!(s.sample_problem_rows.len() <= SAMPLE_LIMIT);
        assert!(s.duplicates_sample.len() <= SAMPLE_LIMIT);
        assert_eq!(report.rows.len(), s.total_rows);
    }
});
