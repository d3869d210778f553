//! Testing utilities for schema validation.
//!
//! This module provides:
//! - Ready-made schema fixtures
//! - Assertions over compatibility reports
//! - Test logging initialization

mod assertions;
mod fixtures;

pub use assertions::{assert_compatible, assert_violation, assert_violation_count};
pub use fixtures::{class_schema, colliding_student_schema, student_schema};

/// Initializes a tracing subscriber for tests, honoring `RUST_LOG`.
///
/// Safe to call from multiple tests; only the first call installs a
/// subscriber.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
