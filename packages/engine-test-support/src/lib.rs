//! Shared helpers for the engine's integration tests: one-time logging
//! setup and the project-wide proptest configuration.

pub mod logging;
pub mod proptest_config;
