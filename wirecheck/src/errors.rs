//! Error types for schema construction and input loading.
//!
//! Structural errors are fatal: they mean the schema model cannot be built,
//! so no validation rule runs. Validation findings are not errors; they are
//! collected as [`crate::report::Violation`] values and never abort a run.

use thiserror::Error;

/// Error raised while loading or building a schema model.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two type declarations share a name.
    #[error("Duplicate type declaration: '{name}'")]
    DuplicateType {
        /// The duplicated type name.
        name: String,
    },

    /// A declaration references a type absent from the input set.
    #[error("Type '{referrer}' references undeclared type '{missing}'")]
    UnresolvedReference {
        /// The declaration holding the dangling reference.
        referrer: String,
        /// The missing type name.
        missing: String,
    },

    /// Base-type links form a cycle, so ancestor chains never terminate.
    #[error("Circular inheritance: {}", cycle_path.join(" -> "))]
    CircularInheritance {
        /// The type names forming the cycle, first repeated at the end.
        cycle_path: Vec<String>,
    },

    /// A declaration carries an out-of-range numeric key.
    #[error("Invalid declaration in '{type_name}': {message}")]
    InvalidDeclaration {
        /// The offending type name.
        type_name: String,
        /// What was wrong with it.
        message: String,
    },

    /// A textual input (document or operation signature) failed to parse.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The JSON document was malformed.
    #[error("Invalid schema document: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading an input file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    /// Creates an unresolved reference error.
    #[must_use]
    pub fn unresolved(referrer: impl Into<String>, missing: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            referrer: referrer.into(),
            missing: missing.into(),
        }
    }

    /// Creates an invalid declaration error.
    #[must_use]
    pub fn invalid(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDeclaration {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}
