//! Schema document assembly and JSON input loading.
//!
//! A [`SchemaDocument`] is the raw, unresolved input to a validation run. It
//! preserves declaration order, which later defines report ordering. JSON
//! documents may spell operations either structurally or as compact
//! signature strings (`"IsAdult(int studentId) -> bool"`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;
use crate::schema::decl::{OperationDeclaration, TypeDeclaration};
use crate::schema::signature::parse_signature;

/// An unresolved collection of declarations, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Type declarations.
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
    /// Exposed operation signatures.
    #[serde(default)]
    pub operations: Vec<OperationDeclaration>,
}

impl SchemaDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type declaration.
    #[must_use]
    pub fn with_type(mut self, decl: TypeDeclaration) -> Self {
        self.types.push(decl);
        self
    }

    /// Adds an operation declaration.
    #[must_use]
    pub fn with_operation(mut self, operation: OperationDeclaration) -> Self {
        self.operations.push(operation);
        self
    }

    /// Adds an operation from its compact signature form.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] when the signature is malformed.
    pub fn with_operation_signature(mut self, signature: &str) -> Result<Self, SchemaError> {
        self.operations.push(parse_signature(signature)?);
        Ok(self)
    }
}

/// JSON wire form of an operation: structured or a signature string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OperationInput {
    Signature(String),
    Declared(OperationDeclaration),
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    types: Vec<TypeDeclaration>,
    #[serde(default)]
    operations: Vec<OperationInput>,
}

/// Loads a schema document from a JSON string.
///
/// # Errors
///
/// Returns [`SchemaError::Json`] on malformed JSON and [`SchemaError::Parse`]
/// on a malformed operation signature string.
pub fn from_json_str(input: &str) -> Result<SchemaDocument, SchemaError> {
    let raw: RawDocument = serde_json::from_str(input)?;

    let mut operations = Vec::with_capacity(raw.operations.len());
    for op in raw.operations {
        operations.push(match op {
            OperationInput::Signature(signature) => parse_signature(&signature)?,
            OperationInput::Declared(decl) => decl,
        });
    }

    Ok(SchemaDocument {
        types: raw.types,
        operations,
    })
}

/// Loads a schema document from a JSON file.
///
/// # Errors
///
/// Returns [`SchemaError::Io`] when the file cannot be read, otherwise the
/// same errors as [`from_json_str`].
pub fn from_path(path: impl AsRef<Path>) -> Result<SchemaDocument, SchemaError> {
    let contents = std::fs::read_to_string(path)?;
    from_json_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::decl::FieldKind;
    use std::io::Write;

    const STUDENT_DOC: &str = r#"{
        "types": [
            {
                "name": "Student",
                "fields": [
                    {"name": "Age", "order": 1, "kind": "primitive", "type": "int"},
                    {"name": "Name", "order": 2, "kind": "primitive", "type": "string"}
                ],
                "inclusions": [{"key": 5, "derived": "CollegeStudent"}],
                "default_constructible": true
            },
            {
                "name": "CollegeStudent",
                "base": "Student",
                "fields": [{"name": "CollegeName", "order": 1, "kind": "primitive"}],
                "default_constructible": true
            }
        ],
        "operations": [
            "IsAdult(int studentId) -> bool",
            {"name": "Enroll", "params": [{"name": "student", "type": "Student"}]}
        ]
    }"#;

    #[test]
    fn test_from_json_str() {
        let doc = from_json_str(STUDENT_DOC).unwrap();

        assert_eq!(doc.types.len(), 2);
        assert_eq!(doc.types[0].name, "Student");
        assert_eq!(doc.types[0].fields[0].kind, FieldKind::Primitive);
        assert_eq!(doc.types[1].base.as_deref(), Some("Student"));

        assert_eq!(doc.operations.len(), 2);
        assert_eq!(doc.operations[0].name, "IsAdult");
        assert_eq!(doc.operations[0].returns.as_deref(), Some("bool"));
        assert_eq!(doc.operations[1].name, "Enroll");
        assert!(doc.operations[1].returns.is_none());
    }

    #[test]
    fn test_from_json_str_malformed_json() {
        let result = from_json_str("{not json");
        assert!(matches!(result, Err(SchemaError::Json(_))));
    }

    #[test]
    fn test_from_json_str_malformed_signature() {
        let result = from_json_str(r#"{"operations": ["not a signature"]}"#);
        assert!(matches!(result, Err(SchemaError::Parse(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(STUDENT_DOC.as_bytes()).unwrap();

        let doc = from_path(file.path()).unwrap();
        assert_eq!(doc.types.len(), 2);
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = from_path("/nonexistent/schema.json");
        assert!(matches!(result, Err(SchemaError::Io(_))));
    }

    #[test]
    fn test_document_builder() {
        let doc = SchemaDocument::new()
            .with_type(TypeDeclaration::new("Student").default_constructible())
            .with_operation_signature("IsAdult(int studentId) -> bool")
            .unwrap();

        assert_eq!(doc.types.len(), 1);
        assert_eq!(doc.operations.len(), 1);
    }
}
