//! Primitive parameter ban rule.

use crate::report::{Violation, ViolationKind};
use crate::rules::Rule;
use crate::schema::{is_primitive_type_name, FieldKind, SchemaGraph};

/// Flags operation signatures that exchange bare primitives.
///
/// Every primitive-typed parameter and every primitive return type gets its
/// own violation. When the schema declares a single-field wrapper for the
/// offending primitive kind, the violation suggests it by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveParameterBan;

impl Rule for PrimitiveParameterBan {
    fn name(&self) -> &'static str {
        "primitive-parameter-ban"
    }

    fn kind(&self) -> ViolationKind {
        ViolationKind::UnwrappedPrimitive
    }

    fn evaluate(&self, graph: &SchemaGraph) -> Vec<Violation> {
        let mut violations = Vec::new();

        for operation in graph.operations() {
            for param in &operation.params {
                if is_primitive_type_name(&param.type_name) {
                    let mut violation = Violation::new(
                        ViolationKind::UnwrappedPrimitive,
                        &operation.name,
                        format!(
                            "parameter '{}' has bare primitive type '{}'",
                            param.name, param.type_name
                        ),
                    )
                    .with_fields([param.name.as_str()]);
                    if let Some(wrapper) = infer_wrapper(graph, &param.type_name) {
                        violation = violation.with_suggestion(wrapper);
                    }
                    violations.push(violation);
                }
            }

            if let Some(returns) = &operation.returns {
                if is_primitive_type_name(returns) {
                    let mut violation = Violation::new(
                        ViolationKind::UnwrappedPrimitive,
                        &operation.name,
                        format!("return type '{returns}' is a bare primitive"),
                    );
                    if let Some(wrapper) = infer_wrapper(graph, returns) {
                        violation = violation.with_suggestion(wrapper);
                    }
                    violations.push(violation);
                }
            }
        }

        violations
    }
}

/// Finds a declared wrapper for a primitive kind: the first type, in input
/// order, with exactly one field of that primitive type.
fn infer_wrapper(graph: &SchemaGraph, primitive: &str) -> Option<String> {
    graph
        .types_in_order()
        .find(|decl| {
            decl.fields.len() == 1
                && decl.fields[0].kind == FieldKind::Primitive
                && decl.fields[0].type_name.as_deref() == Some(primitive)
        })
        .map(|decl| decl.name.clone())
}
