//! Constructor presence rule.

use crate::report::{Violation, ViolationKind};
use crate::rules::Rule;
use crate::schema::SchemaGraph;

/// Flags types without the parameterless-constructor capability flag.
///
/// Deserialization instantiates message types with no arguments, so every
/// declared type must guarantee a zero-argument construction path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructorPresence;

impl Rule for ConstructorPresence {
    fn name(&self) -> &'static str {
        "constructor-presence"
    }

    fn kind(&self) -> ViolationKind {
        ViolationKind::MissingParameterlessConstructor
    }

    fn evaluate(&self, graph: &SchemaGraph) -> Vec<Violation> {
        graph
            .types_in_order()
            .filter(|decl| !decl.default_constructible)
            .map(|decl| {
                Violation::new(
                    ViolationKind::MissingParameterlessConstructor,
                    &decl.name,
                    format!(
                        "type '{}' does not declare a parameterless constructor",
                        decl.name
                    ),
                )
            })
            .collect()
    }
}
