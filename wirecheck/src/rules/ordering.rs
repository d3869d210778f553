//! Ordering uniqueness rule.

use crate::report::{Violation, ViolationKind};
use crate::rules::Rule;
use crate::schema::SchemaGraph;

/// Flags order numbers shared by more than one field within a type.
///
/// Emits exactly one violation per colliding order number, naming every
/// field that declares it. Non-contiguous numbering is fine; only reuse is
/// a violation.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderingUniqueness;

impl Rule for OrderingUniqueness {
    fn name(&self) -> &'static str {
        "ordering-uniqueness"
    }

    fn kind(&self) -> ViolationKind {
        ViolationKind::DuplicateOrder
    }

    fn evaluate(&self, graph: &SchemaGraph) -> Vec<Violation> {
        let mut violations = Vec::new();

        for decl in graph.types_in_order() {
            // Grouped in first-seen order so output is deterministic
            let mut groups: Vec<(u32, Vec<&str>)> = Vec::new();
            for field in &decl.fields {
                match groups.iter_mut().find(|(order, _)| *order == field.order) {
                    Some((_, names)) => names.push(&field.name),
                    None => groups.push((field.order, vec![&field.name])),
                }
            }

            for (order, names) in groups {
                if names.len() > 1 {
                    violations.push(
                        Violation::new(
                            ViolationKind::DuplicateOrder,
                            &decl.name,
                            format!(
                                "order number {} is shared by fields: {}",
                                order,
                                names.join(", ")
                            ),
                        )
                        .with_key(order)
                        .with_fields(names),
                    );
                }
            }
        }

        violations
    }
}
