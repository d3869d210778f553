//! Ready-made schema fixtures for tests and benchmarks.

use crate::schema::{FieldDeclaration, SchemaDocument, TypeDeclaration};

/// A clean two-type hierarchy: `Student` with an inclusion of
/// `CollegeStudent` on key 5, clear of every built-in rule.
#[must_use]
pub fn student_schema() -> SchemaDocument {
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
                .with_field(FieldDeclaration::primitive("CollegeName", 1).with_type_name("string"))
                .default_constructible(),
        )
}

/// The same hierarchy with the inclusion key moved onto 1, colliding with
/// field order numbers on both sides of the inclusion.
#[must_use]
pub fn colliding_student_schema() -> SchemaDocument {
    SchemaDocument::new()
        .with_type(
            TypeDeclaration::new("Student")
                .with_field(FieldDeclaration::primitive("Age", 1).with_type_name("int"))
                .with_field(FieldDeclaration::primitive("Name", 2).with_type_name("string"))
                .with_inclusion(1, "CollegeStudent")
                .default_constructible(),
        )
        .with_type(
            TypeDeclaration::new("CollegeStudent")
                .with_base("Student")
                .with_field(FieldDeclaration::primitive("CollegeName", 1).with_type_name("string"))
                .default_constructible(),
        )
}

/// A single type with unique, non-contiguous field orders.
#[must_use]
pub fn class_schema() -> SchemaDocument {
    SchemaDocument::new().with_type(
        TypeDeclaration::new("Class")
            .with_field(FieldDeclaration::primitive("RoomNumber", 1).with_type_name("int"))
            .with_field(FieldDeclaration::primitive("Subject", 3).with_type_name("string"))
            .with_field(FieldDeclaration::composite("Students", 2).with_type_name("StudentList"))
            .default_constructible(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate_document;

    #[test]
    fn test_student_schema_is_clean() {
        let report = validate_document(&student_schema()).unwrap();
        assert!(report.is_compatible());
    }

    #[test]
    fn test_colliding_student_schema_is_not() {
        let report = validate_document(&colliding_student_schema()).unwrap();
        assert!(!report.is_compatible());
    }

    #[test]
    fn test_class_schema_is_clean() {
        let report = validate_document(&class_schema()).unwrap();
        assert!(report.is_compatible());
    }
}
