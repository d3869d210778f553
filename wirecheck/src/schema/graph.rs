//! Resolved, immutable schema model.
//!
//! [`SchemaGraph::build`] turns a raw [`SchemaDocument`] into a queryable
//! graph: every base-type and inclusion reference is resolved against the
//! input set, numeric keys are range-checked, and inheritance links are
//! verified to be acyclic so ancestor walks always terminate. After a
//! successful build the graph is read-only for the rest of the run.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::errors::SchemaError;
use crate::schema::decl::{OperationDeclaration, TypeDeclaration};
use crate::schema::loader::SchemaDocument;

/// A resolved schema, immutable during rule evaluation.
#[derive(Debug)]
pub struct SchemaGraph {
    types: HashMap<String, TypeDeclaration>,
    type_order: Vec<String>,
    operations: Vec<OperationDeclaration>,
}

impl SchemaGraph {
    /// Builds a graph from a document, resolving all references.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateType`] when two declarations share a
    /// name, [`SchemaError::UnresolvedReference`] when a base type or an
    /// inclusion's derived type is absent from the input set,
    /// [`SchemaError::CircularInheritance`] when base links form a cycle,
    /// and [`SchemaError::InvalidDeclaration`] for non-positive order
    /// numbers or inclusion keys.
    pub fn build(document: &SchemaDocument) -> Result<Self, SchemaError> {
        debug!(
            types = document.types.len(),
            operations = document.operations.len(),
            "building schema graph"
        );

        let mut types: HashMap<String, TypeDeclaration> = HashMap::new();
        let mut type_order = Vec::with_capacity(document.types.len());

        for decl in &document.types {
            if types.contains_key(&decl.name) {
                return Err(SchemaError::DuplicateType {
                    name: decl.name.clone(),
                });
            }
            type_order.push(decl.name.clone());
            types.insert(decl.name.clone(), decl.clone());
        }

        // Validate against the document, not the map, so the first error
        // reported is deterministic
        for decl in &document.types {
            validate_numbers(decl)?;

            if let Some(base) = &decl.base {
                if !types.contains_key(base) {
                    return Err(SchemaError::unresolved(&decl.name, base));
                }
            }
            for inclusion in &decl.inclusions {
                if !types.contains_key(&inclusion.derived) {
                    return Err(SchemaError::unresolved(&decl.name, &inclusion.derived));
                }
            }
        }

        validate_acyclic(&types, &type_order)?;

        Ok(Self {
            types,
            type_order,
            operations: document.operations.clone(),
        })
    }

    /// Looks up a type declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDeclaration> {
        self.types.get(name)
    }

    /// Iterates type declarations in input order.
    pub fn types_in_order(&self) -> impl Iterator<Item = &TypeDeclaration> {
        self.type_order.iter().filter_map(|name| self.types.get(name))
    }

    /// Returns the declared operations, in input order.
    #[must_use]
    pub fn operations(&self) -> &[OperationDeclaration] {
        &self.operations
    }

    /// Returns the ancestor chain of a type, nearest base first.
    ///
    /// Returns an empty chain for unknown names; cycles were rejected at
    /// build time, so the walk terminates.
    #[must_use]
    pub fn ancestors(&self, name: &str) -> Vec<&TypeDeclaration> {
        let mut chain = Vec::new();
        let mut current = self.types.get(name).and_then(|t| t.base.as_deref());
        while let Some(base) = current {
            match self.types.get(base) {
                Some(decl) => {
                    chain.push(decl);
                    current = decl.base.as_deref();
                }
                None => break,
            }
        }
        chain
    }

    /// Returns the number of declared types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.type_order.len()
    }

    /// Input-order rank of a report target: types first in declaration
    /// order, then operations in declaration order.
    #[must_use]
    pub fn target_rank(&self, target: &str) -> Option<usize> {
        if let Some(position) = self.type_order.iter().position(|name| name == target) {
            return Some(position);
        }
        self.operations
            .iter()
            .position(|op| op.name == target)
            .map(|position| self.type_order.len() + position)
    }
}

fn validate_numbers(decl: &TypeDeclaration) -> Result<(), SchemaError> {
    for field in &decl.fields {
        if field.order == 0 {
            return Err(SchemaError::invalid(
                &decl.name,
                format!("field '{}' has order 0; order numbers start at 1", field.name),
            ));
        }
    }
    for inclusion in &decl.inclusions {
        if inclusion.key == 0 {
            return Err(SchemaError::invalid(
                &decl.name,
                format!(
                    "inclusion of '{}' has key 0; reserved keys start at 1",
                    inclusion.derived
                ),
            ));
        }
    }
    Ok(())
}

/// Verifies base links form no cycle, visiting in input order so the
/// reported cycle path is deterministic.
fn validate_acyclic(
    types: &HashMap<String, TypeDeclaration>,
    type_order: &[String],
) -> Result<(), SchemaError> {
    let mut verified: HashSet<&str> = HashSet::new();

    for name in type_order {
        if verified.contains(name.as_str()) {
            continue;
        }

        let mut path: Vec<&str> = Vec::new();
        let mut on_path: HashSet<&str> = HashSet::new();
        let mut current: Option<&str> = Some(name.as_str());

        while let Some(node) = current {
            if verified.contains(node) {
                break;
            }
            if on_path.contains(node) {
                // on_path mirrors path, so the node is always found
                let start = path.iter().position(|n| *n == node).unwrap_or(0);
                let mut cycle_path: Vec<String> =
                    path[start..].iter().map(ToString::to_string).collect();
                cycle_path.push(node.to_string());
                return Err(SchemaError::CircularInheritance { cycle_path });
            }
            path.push(node);
            on_path.insert(node);
            current = types.get(node).and_then(|t| t.base.as_deref());
        }

        for node in path {
            verified.insert(node);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::decl::FieldDeclaration;

    fn student_doc() -> SchemaDocument {
        SchemaDocument::new()
            .with_type(
                TypeDeclaration::new("Student")
                    .with_field(FieldDeclaration::primitive("Age", 1).with_type_name("int"))
                    .with_field(FieldDeclaration::primitive("Name", 2).with_type_name("string"))
                    .with_inclusion(5, "CollegeStudent")
                    .default_constructible(),
            )
            .with_type(
                TypeDeclaration::new("CollegeStudent")
                    .with_base("Student")
                    .with_field(FieldDeclaration::primitive("CollegeName", 1))
                    .default_constructible(),
            )
    }

    #[test]
    fn test_build_resolves_references() {
        let graph = SchemaGraph::build(&student_doc()).unwrap();

        assert_eq!(graph.type_count(), 2);
        assert!(graph.get("Student").is_some());
        assert!(graph.get("Missing").is_none());

        let order: Vec<_> = graph.types_in_order().map(|t| t.name.as_str()).collect();
        assert_eq!(order, vec!["Student", "CollegeStudent"]);
    }

    #[test]
    fn test_build_duplicate_type() {
        let doc = SchemaDocument::new()
            .with_type(TypeDeclaration::new("Student"))
            .with_type(TypeDeclaration::new("Student"));

        let result = SchemaGraph::build(&doc);
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateType { name }) if name == "Student"
        ));
    }

    #[test]
    fn test_build_unresolved_base() {
        let doc =
            SchemaDocument::new().with_type(TypeDeclaration::new("CollegeStudent").with_base("Student"));

        let result = SchemaGraph::build(&doc);
        assert!(matches!(
            result,
            Err(SchemaError::UnresolvedReference { referrer, missing })
                if referrer == "CollegeStudent" && missing == "Student"
        ));
    }

    #[test]
    fn test_build_unresolved_inclusion() {
        let doc = SchemaDocument::new()
            .with_type(TypeDeclaration::new("Student").with_inclusion(5, "CollegeStudent"));

        let result = SchemaGraph::build(&doc);
        assert!(matches!(
            result,
            Err(SchemaError::UnresolvedReference { missing, .. }) if missing == "CollegeStudent"
        ));
    }

    #[test]
    fn test_build_circular_inheritance() {
        let doc = SchemaDocument::new()
            .with_type(TypeDeclaration::new("A").with_base("B"))
            .with_type(TypeDeclaration::new("B").with_base("A"));

        let result = SchemaGraph::build(&doc);
        assert!(matches!(result, Err(SchemaError::CircularInheritance { .. })));
    }

    #[test]
    fn test_build_self_inheritance() {
        let doc = SchemaDocument::new().with_type(TypeDeclaration::new("A").with_base("A"));

        let result = SchemaGraph::build(&doc);
        assert!(matches!(
            result,
            Err(SchemaError::CircularInheritance { cycle_path }) if cycle_path == vec!["A", "A"]
        ));
    }

    #[test]
    fn test_cycle_path_starts_at_reentry_point() {
        let doc = SchemaDocument::new()
            .with_type(TypeDeclaration::new("A").with_base("B"))
            .with_type(TypeDeclaration::new("B").with_base("C"))
            .with_type(TypeDeclaration::new("C").with_base("B"));

        let result = SchemaGraph::build(&doc);
        assert!(matches!(
            result,
            Err(SchemaError::CircularInheritance { cycle_path }) if cycle_path == vec!["B", "C", "B"]
        ));
    }

    #[test]
    fn test_build_rejects_zero_order() {
        let doc = SchemaDocument::new()
            .with_type(TypeDeclaration::new("Student").with_field(FieldDeclaration::primitive("Age", 0)));

        let result = SchemaGraph::build(&doc);
        assert!(matches!(result, Err(SchemaError::InvalidDeclaration { .. })));
    }

    #[test]
    fn test_build_rejects_zero_inclusion_key() {
        let doc = SchemaDocument::new()
            .with_type(TypeDeclaration::new("Student").with_inclusion(0, "CollegeStudent"))
            .with_type(TypeDeclaration::new("CollegeStudent").with_base("Student"));

        let result = SchemaGraph::build(&doc);
        assert!(matches!(
            result,
            Err(SchemaError::InvalidDeclaration { type_name, .. }) if type_name == "Student"
        ));
    }

    #[test]
    fn test_ancestors_chain() {
        let doc = SchemaDocument::new()
            .with_type(TypeDeclaration::new("Person"))
            .with_type(TypeDeclaration::new("Student").with_base("Person"))
            .with_type(TypeDeclaration::new("CollegeStudent").with_base("Student"));

        let graph = SchemaGraph::build(&doc).unwrap();
        let chain: Vec<_> = graph
            .ancestors("CollegeStudent")
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(chain, vec!["Student", "Person"]);

        assert!(graph.ancestors("Person").is_empty());
        assert!(graph.ancestors("Unknown").is_empty());
    }

    #[test]
    fn test_target_rank_types_then_operations() {
        let doc = student_doc()
            .with_operation_signature("IsAdult(int studentId) -> bool")
            .unwrap();
        let graph = SchemaGraph::build(&doc).unwrap();

        assert_eq!(graph.target_rank("Student"), Some(0));
        assert_eq!(graph.target_rank("CollegeStudent"), Some(1));
        assert_eq!(graph.target_rank("IsAdult"), Some(2));
        assert_eq!(graph.target_rank("Unknown"), None);
    }
}
