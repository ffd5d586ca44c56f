// Proptest prelude for domain unit tests; shares the integration-test
// config so PROPTEST_CASES applies everywhere.

pub use engine_test_support::proptest_config::proptest_config;
