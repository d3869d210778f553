//! Validation run orchestration.
//!
//! A run is strictly phased: build the schema graph (structural errors
//! abort here, before any rule runs), evaluate every rule, assemble the
//! ordered report, discard the graph. Runs hold no state between calls, so
//! identical input always yields an identical report.

use tracing::{debug, info};

use crate::errors::SchemaError;
use crate::report::CompatibilityReport;
use crate::rules::{Rule, RuleEngine};
use crate::schema::{SchemaDocument, SchemaGraph};

/// Validates schema documents against a rule set.
#[derive(Debug, Default)]
pub struct Validator {
    engine: RuleEngine,
}

impl Validator {
    /// Creates a validator with the built-in rule set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new(),
        }
    }

    /// Appends a rule to the set.
    #[must_use]
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.engine = self.engine.with_rule(rule);
        self
    }

    /// Runs a full validation pass over a document.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] when the schema model cannot be built;
    /// validation violations never produce an error, they are collected in
    /// the report.
    pub fn validate(&self, document: &SchemaDocument) -> Result<CompatibilityReport, SchemaError> {
        let graph = SchemaGraph::build(document)?;
        debug!(types = graph.type_count(), "schema graph built");

        let violations = self.engine.run(&graph);
        let report = CompatibilityReport::new(violations, &graph);

        info!(
            violations = report.len(),
            compatible = report.is_compatible(),
            "validation complete"
        );
        Ok(report)
    }
}

/// Validates a document with the built-in rule set.
///
/// # Errors
///
/// Same contract as [`Validator::validate`].
pub fn validate_document(document: &SchemaDocument) -> Result<CompatibilityReport, SchemaError> {
    Validator::new().validate(document)
}
