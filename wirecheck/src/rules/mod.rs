//! Validation rules and the engine that runs them.
//!
//! Each rule is a pure function over the resolved [`SchemaGraph`]: it holds
//! no state, never mutates the graph, and never aborts the run. The engine
//! runs every rule regardless of earlier findings and concatenates outputs
//! preserving rule-declaration order, then discovery order within each rule.

mod constructor;
mod inclusion;
mod ordering;
mod primitives;


pub use constructor::ConstructorPresence;
pub use inclusion::InclusionKeyExclusivity;
pub use ordering::OrderingUniqueness;
pub use primitives::PrimitiveParameterBan;

use tracing::debug;

use crate::report::{Violation, ViolationKind};
use crate::schema::SchemaGraph;

/// A single validation rule.
pub trait Rule: Send + Sync {
    /// Human-readable rule name.
    fn name(&self) -> &'static str;

    /// The violation kind this rule produces.
    fn kind(&self) -> ViolationKind;

    /// Evaluates the rule, returning zero or more violations in discovery
    /// order.
    fn evaluate(&self, graph: &SchemaGraph) -> Vec<Violation>;
}

/// Runs a fixed set of rules over a schema graph.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Creates an engine with the built-in rule set, in the enumeration
    /// order of [`ViolationKind`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(OrderingUniqueness),
                Box::new(InclusionKeyExclusivity),
                Box::new(ConstructorPresence),
                Box::new(PrimitiveParameterBan),
            ],
        }
    }

    /// Creates an engine with no rules.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the set.
    #[must_use]
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs every rule and concatenates the findings.
    #[must_use]
    pub fn run(&self, graph: &SchemaGraph) -> Vec<Violation> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            let found = rule.evaluate(graph);
            debug!(rule = rule.name(), violations = found.len(), "rule evaluated");
            violations.extend(found);
        }
        violations
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}
