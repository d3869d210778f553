//! Violation aggregation and report generation.
//!
//! This module provides:
//! - The `Violation` finding type and its kind enumeration
//! - The ordered, deterministic `CompatibilityReport`
//! - Text/JSON rendering and remediation suggestions

mod render;
mod suggestions;

pub use suggestions::{
    get_suggestion, list_suggestions, register_suggestion, ViolationSuggestion,
};

use serde::{Serialize, Serializer};

use crate::schema::SchemaGraph;

/// The kind of a compatibility violation, in rule-declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationKind {
    /// Two fields in one type share an order number.
    DuplicateOrder,
    /// An inclusion's reserved key collides with a field order number.
    InclusionKeyCollision,
    /// A type lacks the parameterless-constructor capability flag.
    MissingParameterlessConstructor,
    /// An operation references a bare primitive kind directly.
    UnwrappedPrimitive,
}

impl ViolationKind {
    /// Stable code used in reports and the suggestion registry.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::DuplicateOrder => "SCHEMA-001-DUP_ORDER",
            Self::InclusionKeyCollision => "SCHEMA-002-INCLUSION_KEY",
            Self::MissingParameterlessConstructor => "SCHEMA-003-NO_DEFAULT_CTOR",
            Self::UnwrappedPrimitive => "SCHEMA-004-PRIMITIVE",
        }
    }

    /// Position in the rule enumeration, used for report grouping.
    #[must_use]
    pub const fn rank(self) -> usize {
        match self {
            Self::DuplicateOrder => 0,
            Self::InclusionKeyCollision => 1,
            Self::MissingParameterlessConstructor => 2,
            Self::UnwrappedPrimitive => 3,
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for ViolationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// A single incompatibility finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Violation kind.
    pub kind: ViolationKind,
    /// Offending type or operation name.
    pub target: String,
    /// Relevant numeric keys (order numbers, inclusion keys).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<u32>,
    /// Relevant field or parameter names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    /// Human-readable explanation.
    pub message: String,
    /// Wrapping type suggested for an unwrapped primitive, when inferable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_wrapper: Option<String>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(kind: ViolationKind, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            keys: Vec::new(),
            fields: Vec::new(),
            message: message.into(),
            suggested_wrapper: None,
        }
    }

    /// Adds a numeric key.
    #[must_use]
    pub fn with_key(mut self, key: u32) -> Self {
        self.keys.push(key);
        self
    }

    /// Sets the involved field names.
    #[must_use]
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the suggested wrapping type.
    #[must_use]
    pub fn with_suggestion(mut self, wrapper: impl Into<String>) -> Self {
        self.suggested_wrapper = Some(wrapper.into());
        self
    }
}

/// The ordered result of one validation run.
///
/// Violations are grouped by target in input order (types first, then
/// operations), then by rule kind, then by discovery order. An empty report
/// means the schema is fully compatible.
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityReport {
    /// All findings, in report order.
    pub violations: Vec<Violation>,
}

impl CompatibilityReport {
    /// Assembles a report, ordering violations against the graph's input
    /// order. The sort is stable, so discovery order is preserved within
    /// each (target, kind) group.
    #[must_use]
    pub fn new(mut violations: Vec<Violation>, graph: &SchemaGraph) -> Self {
        violations.sort_by_key(|v| {
            (
                graph.target_rank(&v.target).unwrap_or(usize::MAX),
                v.kind.rank(),
            )
        });
        Self { violations }
    }

    /// Creates an empty (fully compatible) report.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// True when no violation was found.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of findings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when the report holds no findings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Findings of a given kind, in report order.
    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.kind == kind)
    }

    /// Human readable summary string.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_compatible() {
            "Schema compatible: no violations".to_string()
        } else {
            format!("Schema incompatible: {} violation(s)", self.violations.len())
        }
    }
}
