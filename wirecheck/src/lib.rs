//! # Wirecheck
//!
//! A compatibility validator for order-numbered data contracts.
//!
//! Wirecheck inspects a set of structured data-type declarations (fields
//! with explicit order numbers, inheritance via reserved inclusion keys,
//! parameterless-constructor capability flags) and reports compatibility
//! violations before they cause runtime serialization failures:
//!
//! - **Schema model**: declarations resolved into an immutable graph
//! - **Rule engine**: independent, full-pass validation rules
//! - **Report generation**: deterministic, grouped violation reports
//!
//! ## Quick Start
//!
//! ```rust
//! use wirecheck::prelude::*;
//!
//! let document = SchemaDocument::new()
//!     .with_type(
//!         TypeDeclaration::new("Student")
//!             .with_field(FieldDeclaration::primitive("Age", 1).with_type_name("int"))
//!             .with_field(FieldDeclaration::primitive("Name", 2).with_type_name("string"))
//!             .default_constructible(),
//!     )
//!     .with_operation_signature("IsAdult(int studentId) -> bool")?;
//!
//! let report = validate_document(&document)?;
//! assert!(!report.is_compatible());
//! println!("{}", report.render_text());
//! # Ok::<(), wirecheck::errors::SchemaError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod errors;
pub mod report;
pub mod rules;
pub mod schema;
pub mod testing;
pub mod validator;

pub use validator::validate_document;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::SchemaError;
    pub use crate::report::{
        CompatibilityReport, Violation, ViolationKind, ViolationSuggestion,
    };
    pub use crate::rules::{
        ConstructorPresence, InclusionKeyExclusivity, OrderingUniqueness,
        PrimitiveParameterBan, Rule, RuleEngine,
    };
    pub use crate::schema::{
        FieldDeclaration, FieldKind, InclusionDeclaration, OperationDeclaration,
        ParamDeclaration, SchemaDocument, SchemaGraph, TypeDeclaration,
    };
    pub use crate::validator::{validate_document, Validator};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::testing;

    #[test]
    fn test_json_document_end_to_end() {
        testing::init_test_logging();

        let document = crate::schema::from_json_str(
            r#"{
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
                ]
            }"#,
        )
        .unwrap();

        let report = validate_document(&document).unwrap();
        testing::assert_compatible(&report);
    }

    #[test]
    fn test_prelude_covers_custom_rules() {
        struct NamePrefix;
        impl Rule for NamePrefix {
            fn name(&self) -> &'static str {
                "name-prefix"
            }
            fn kind(&self) -> ViolationKind {
                ViolationKind::DuplicateOrder
            }
            fn evaluate(&self, graph: &SchemaGraph) -> Vec<Violation> {
                graph
                    .types_in_order()
                    .filter(|t| t.name.starts_with('_'))
                    .map(|t| {
                        Violation::new(ViolationKind::DuplicateOrder, &t.name, "underscore prefix")
                    })
                    .collect()
            }
        }

        let document = SchemaDocument::new()
            .with_type(TypeDeclaration::new("_Hidden").default_constructible());
        let report = Validator::new()
            .with_rule(Box::new(NamePrefix))
            .validate(&document)
            .unwrap();

        assert_eq!(report.len(), 1);
    }
}
