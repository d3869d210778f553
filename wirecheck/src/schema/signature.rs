//! Compact textual form for operation signatures.
//!
//! Accepts strings like `IsAdult(int studentId) -> bool` or
//! `RegisterStudent(StudentRecord record)` and produces an
//! [`OperationDeclaration`]. The arrow clause is optional for operations
//! without a return value.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::SchemaError;
use crate::schema::decl::OperationDeclaration;

#[allow(clippy::expect_used)]
static SIGNATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_]\w*)\s*\(([^()]*)\)\s*(?:->\s*([A-Za-z_]\w*)\s*)?$")
        .expect("signature regex is valid")
});

#[allow(clippy::expect_used)]
static PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_]\w*)\s+([A-Za-z_]\w*)\s*$").expect("parameter regex is valid")
});

/// Parses a compact operation signature.
///
/// # Errors
///
/// Returns [`SchemaError::Parse`] when the string does not match the
/// `Name(type name, ...) -> type` shape.
pub fn parse_signature(signature: &str) -> Result<OperationDeclaration, SchemaError> {
    let captures = SIGNATURE_RE
        .captures(signature)
        .ok_or_else(|| SchemaError::Parse(format!("Malformed operation signature: '{signature}'")))?;

    let name = &captures[1];
    let mut operation = OperationDeclaration::new(name);

    let params = captures[2].trim();
    if !params.is_empty() {
        for raw in params.split(',') {
            let param = PARAM_RE.captures(raw).ok_or_else(|| {
                SchemaError::Parse(format!(
                    "Malformed parameter '{}' in operation '{}'",
                    raw.trim(),
                    name
                ))
            })?;
            operation = operation.with_param(&param[2], &param[1]);
        }
    }

    if let Some(returns) = captures.get(3) {
        operation = operation.with_return(returns.as_str());
    }

    Ok(operation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signature_with_return() {
        let op = parse_signature("IsAdult(int studentId) -> bool").unwrap();
        assert_eq!(op.name, "IsAdult");
        assert_eq!(op.params.len(), 1);
        assert_eq!(op.params[0].name, "studentId");
        assert_eq!(op.params[0].type_name, "int");
        assert_eq!(op.returns.as_deref(), Some("bool"));
    }

    #[test]
    fn test_parse_signature_without_return() {
        let op = parse_signature("RegisterStudent(StudentRecord record)").unwrap();
        assert_eq!(op.name, "RegisterStudent");
        assert_eq!(op.params[0].type_name, "StudentRecord");
        assert!(op.returns.is_none());
    }

    #[test]
    fn test_parse_signature_multiple_params() {
        let op = parse_signature("Enroll(Student student, Class class_) -> EnrollResult").unwrap();
        assert_eq!(op.params.len(), 2);
        assert_eq!(op.params[1].name, "class_");
        assert_eq!(op.returns.as_deref(), Some("EnrollResult"));
    }

    #[test]
    fn test_parse_signature_no_params() {
        let op = parse_signature("ListStudents() -> StudentList").unwrap();
        assert!(op.params.is_empty());
    }

    #[test]
    fn test_parse_signature_malformed() {
        assert!(parse_signature("not a signature").is_err());
        assert!(parse_signature("Broken(int)").is_err());
        assert!(parse_signature("Broken(int studentId) ->").is_err());
        assert!(parse_signature("").is_err());
    }
}
