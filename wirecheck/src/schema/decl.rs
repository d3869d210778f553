//! Declaration types making up a schema document.
//!
//! Declarations are plain data: they carry exactly what the input supplied,
//! in the order it was supplied. Resolution and invariant checking happen in
//! [`crate::schema::SchemaGraph`] and the rule engine respectively.

use serde::{Deserialize, Serialize};

/// Kind tag for a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A bare primitive value (int, bool, string, ...).
    Primitive,
    /// A composite value referencing another declared type.
    #[default]
    Composite,
}

/// A field with an explicit wire order number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    /// Field name.
    pub name: String,
    /// Declared order number. Must be positive.
    pub order: u32,
    /// Primitive/composite kind tag.
    #[serde(default)]
    pub kind: FieldKind,
    /// Declared type of the field, when the input names one.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl FieldDeclaration {
    /// Creates a primitive field.
    #[must_use]
    pub fn primitive(name: impl Into<String>, order: u32) -> Self {
        Self {
            name: name.into(),
            order,
            kind: FieldKind::Primitive,
            type_name: None,
        }
    }

    /// Creates a composite field.
    #[must_use]
    pub fn composite(name: impl Into<String>, order: u32) -> Self {
        Self {
            name: name.into(),
            order,
            kind: FieldKind::Composite,
            type_name: None,
        }
    }

    /// Sets the declared type name.
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

/// A reserved inclusion key marking a polymorphic subtype relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionDeclaration {
    /// Reserved key. Must be positive and distinct from field order numbers.
    pub key: u32,
    /// Name of the derived type this inclusion points at.
    pub derived: String,
}

impl InclusionDeclaration {
    /// Creates a new inclusion declaration.
    #[must_use]
    pub fn new(key: u32, derived: impl Into<String>) -> Self {
        Self {
            key,
            derived: derived.into(),
        }
    }
}

/// A declared data-contract type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Type name, unique within a document.
    pub name: String,
    /// Base type name, when the type derives from another declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Declared fields, in input order.
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,
    /// Inclusion declarations for derived types, in input order.
    #[serde(default)]
    pub inclusions: Vec<InclusionDeclaration>,
    /// Whether the type guarantees a zero-argument construction path.
    #[serde(default)]
    pub default_constructible: bool,
}

impl TypeDeclaration {
    /// Creates a new type declaration with no fields and the
    /// default-constructible flag unset.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            fields: Vec::new(),
            inclusions: Vec::new(),
            default_constructible: false,
        }
    }

    /// Sets the base type.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds an inclusion declaration.
    #[must_use]
    pub fn with_inclusion(mut self, key: u32, derived: impl Into<String>) -> Self {
        self.inclusions.push(InclusionDeclaration::new(key, derived));
        self
    }

    /// Marks the type as constructible with no arguments.
    #[must_use]
    pub fn default_constructible(mut self) -> Self {
        self.default_constructible = true;
        self
    }
}

/// A parameter of an exposed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDeclaration {
    /// Parameter name.
    pub name: String,
    /// Declared type name.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ParamDeclaration {
    /// Creates a new parameter declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// An exposed operation signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDeclaration {
    /// Operation name.
    pub name: String,
    /// Parameters, in signature order.
    #[serde(default)]
    pub params: Vec<ParamDeclaration>,
    /// Return type name, when the operation returns a value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

impl OperationDeclaration {
    /// Creates a new operation with no parameters and no return value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: None,
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.params.push(ParamDeclaration::new(name, type_name));
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn with_return(mut self, type_name: impl Into<String>) -> Self {
        self.returns = Some(type_name.into());
        self
    }
}

/// Primitive kind names recognized in operation signatures.
const PRIMITIVE_TYPE_NAMES: &[&str] = &[
    "bool", "byte", "sbyte", "char", "short", "ushort", "int", "uint", "long", "ulong", "float",
    "double", "decimal", "string",
];

/// Returns true when `name` is a bare primitive kind rather than a declared
/// data-contract type.
#[must_use]
pub fn is_primitive_type_name(name: &str) -> bool {
    PRIMITIVE_TYPE_NAMES.contains(&name)
}
