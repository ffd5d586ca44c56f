// Proptest prelude shared by integration tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 8).
// - PROPTEST_MAX_SHRINK_MS: optional cap for shrinking time in milliseconds.
//
// Generate valid inputs by construction rather than with prop_assume!.

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    engine_test_support::proptest_config::proptest_config()
}
