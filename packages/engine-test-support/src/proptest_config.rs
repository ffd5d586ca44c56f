//! Proptest settings used across engine test binaries.
//!
//! Env knobs:
//! - `PROPTEST_CASES`: cases per property (default 8, minimum 1).
//! - `PROPTEST_MAX_SHRINK_MS`: cap on shrinking time in milliseconds.

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    let base = ProptestConfig::default();

    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(8)
        .max(1);

    let max_shrink_time = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    ProptestConfig {
        // No regression files for generated hands
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
