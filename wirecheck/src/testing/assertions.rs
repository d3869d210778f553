//! Assertions over compatibility reports.

use crate::report::{CompatibilityReport, ViolationKind};

/// Asserts the report holds no violations.
///
/// # Panics
///
/// Panics with the rendered report when violations are present.
pub fn assert_compatible(report: &CompatibilityReport) {
    assert!(
        report.is_compatible(),
        "expected a compatible schema, got:\n{}",
        report.render_text()
    );
}

/// Asserts the report contains a violation of `kind` targeting `target`.
///
/// # Panics
///
/// Panics with the rendered report when no such violation exists.
pub fn assert_violation(report: &CompatibilityReport, kind: ViolationKind, target: &str) {
    assert!(
        report
            .violations
            .iter()
            .any(|v| v.kind == kind && v.target == target),
        "expected a {} violation on '{}', got:\n{}",
        kind.code(),
        target,
        report.render_text()
    );
}

/// Asserts the report contains exactly `expected` violations of `kind`.
///
/// # Panics
///
/// Panics with the rendered report on a count mismatch.
pub fn assert_violation_count(report: &CompatibilityReport, kind: ViolationKind, expected: usize) {
    let actual = report.of_kind(kind).count();
    assert_eq!(
        actual,
        expected,
        "expected {} {} violation(s), got {}:\n{}",
        expected,
        kind.code(),
        actual,
        report.render_text()
    );
}
