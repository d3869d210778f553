//! Inclusion key exclusivity rule.

use crate::report::{Violation, ViolationKind};
use crate::rules::Rule;
use crate::schema::{SchemaGraph, TypeDeclaration};

/// Flags inclusion keys that reuse a field order number anywhere in the
/// hierarchy they bridge.
///
/// For an inclusion with key `k` declared on type `T` pointing at derived
/// type `D`, the reserved number space spans `T`'s own fields, every
/// ancestor of `T`, and `D`'s own fields. One violation is emitted per
/// colliding inclusion declaration, naming all colliding fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct InclusionKeyExclusivity;

impl Rule for InclusionKeyExclusivity {
    fn name(&self) -> &'static str {
        "inclusion-key-exclusivity"
    }

    fn kind(&self) -> ViolationKind {
        ViolationKind::InclusionKeyCollision
    }

    fn evaluate(&self, graph: &SchemaGraph) -> Vec<Violation> {
        let mut violations = Vec::new();

        for decl in graph.types_in_order() {
            for inclusion in &decl.inclusions {
                let mut colliding: Vec<String> = Vec::new();

                collect_collisions(decl, inclusion.key, &mut colliding);
                for ancestor in graph.ancestors(&decl.name) {
                    collect_collisions(ancestor, inclusion.key, &mut colliding);
                }
                if inclusion.derived != decl.name {
                    if let Some(derived) = graph.get(&inclusion.derived) {
                        collect_collisions(derived, inclusion.key, &mut colliding);
                    }
                }

                if !colliding.is_empty() {
                    violations.push(
                        Violation::new(
                            ViolationKind::InclusionKeyCollision,
                            &decl.name,
                            format!(
                                "inclusion key {} for derived type '{}' collides with field order(s): {}",
                                inclusion.key,
                                inclusion.derived,
                                colliding.join(", ")
                            ),
                        )
                        .with_key(inclusion.key)
                        .with_fields(colliding),
                    );
                }
            }
        }

        violations
    }
}

fn collect_collisions(decl: &TypeDeclaration, key: u32, out: &mut Vec<String>) {
    for field in &decl.fields {
        if field.order == key {
            let qualified = format!("{}.{}", decl.name, field.name);
            if !out.contains(&qualified) {
                out.push(qualified);
            }
        }
    }
}
