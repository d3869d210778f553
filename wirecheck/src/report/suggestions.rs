//! Remediation registry mapping violation codes to fix hints.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Structured remediation info for a violation code.
#[derive(Debug, Clone)]
pub struct ViolationSuggestion {
    /// Violation code this suggestion applies to.
    pub code: String,
    /// Short title for the violation.
    pub title: String,
    /// Detailed summary of the issue.
    pub summary: String,
    /// Steps to fix the issue.
    pub fix_steps: Vec<String>,
}

impl ViolationSuggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        fix_steps: Vec<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            summary: summary.into(),
            fix_steps,
        }
    }
}

static SUGGESTIONS: LazyLock<RwLock<HashMap<String, ViolationSuggestion>>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Preload default suggestions for the built-in rules
    map.insert(
        "SCHEMA-001-DUP_ORDER".to_string(),
        ViolationSuggestion::new(
            "SCHEMA-001-DUP_ORDER",
            "Duplicate Field Order",
            "Two fields in one type declare the same order number, so their wire encodings collide.",
            vec![
                "Assign a distinct order number to each field".to_string(),
                "Order numbers need not be contiguous, only unique".to_string(),
            ],
        ),
    );

    map.insert(
        "SCHEMA-002-INCLUSION_KEY".to_string(),
        ViolationSuggestion::new(
            "SCHEMA-002-INCLUSION_KEY",
            "Inclusion Key Collision",
            "A reserved inclusion key reuses a number already taken by a field order in the hierarchy.",
            vec![
                "Pick a reserved key outside every field order number in the type, its ancestors, and the derived type".to_string(),
                "Leaving a gap above the highest field order keeps room for future fields".to_string(),
            ],
        ),
    );

    map.insert(
        "SCHEMA-003-NO_DEFAULT_CTOR".to_string(),
        ViolationSuggestion::new(
            "SCHEMA-003-NO_DEFAULT_CTOR",
            "Missing Parameterless Constructor",
            "Deserialization requires every message type to be constructible with no arguments.",
            vec![
                "Add a zero-argument construction path to the type".to_string(),
                "Mark the declaration as default-constructible once it exists".to_string(),
            ],
        ),
    );

    map.insert(
        "SCHEMA-004-PRIMITIVE".to_string(),
        ViolationSuggestion::new(
            "SCHEMA-004-PRIMITIVE",
            "Unwrapped Primitive in Operation",
            "Operation signatures must exchange declared data-contract types, not bare primitives.",
            vec![
                "Declare a wrapper type with a single ordered field of the primitive kind".to_string(),
                "Reference the wrapper in the operation signature".to_string(),
            ],
        ),
    );

    map.insert(
        "SCHEMA-000-CYCLE".to_string(),
        ViolationSuggestion::new(
            "SCHEMA-000-CYCLE",
            "Circular Inheritance",
            "Base-type links loop back on themselves, so the hierarchy cannot be resolved.",
            vec![
                "Review the reported cycle path".to_string(),
                "Remove at least one base-type link to break the loop".to_string(),
            ],
        ),
    );

    RwLock::new(map)
});

/// Register a suggestion for a violation code.
pub fn register_suggestion(suggestion: ViolationSuggestion) {
    SUGGESTIONS.write().insert(suggestion.code.clone(), suggestion);
}

/// Return suggestion metadata for a violation code if registered.
#[must_use]
pub fn get_suggestion(code: &str) -> Option<ViolationSuggestion> {
    SUGGESTIONS.read().get(code).cloned()
}

/// Returns all registered suggestions.
#[must_use]
pub fn list_suggestions() -> Vec<ViolationSuggestion> {
    SUGGESTIONS.read().values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ViolationKind;

    #[test]
    fn test_builtin_rules_have_suggestions() {
        for kind in [
            ViolationKind::DuplicateOrder,
            ViolationKind::InclusionKeyCollision,
            ViolationKind::MissingParameterlessConstructor,
            ViolationKind::UnwrappedPrimitive,
        ] {
            let suggestion = get_suggestion(kind.code());
            assert!(suggestion.is_some(), "no suggestion for {}", kind.code());
            assert!(!suggestion.unwrap().fix_steps.is_empty());
        }
    }

    #[test]
    fn test_get_unknown_suggestion() {
        assert!(get_suggestion("UNKNOWN-CODE").is_none());
    }

    #[test]
    fn test_register_custom_suggestion() {
        let custom = ViolationSuggestion::new(
            "CUSTOM-001",
            "Custom Violation",
            "A custom violation for testing",
            vec!["Fix step 1".to_string()],
        );
        register_suggestion(custom);

        let suggestion = get_suggestion("CUSTOM-001");
        assert!(suggestion.is_some());
        assert_eq!(suggestion.unwrap().title, "Custom Violation");
    }

    #[test]
    fn test_list_suggestions() {
        assert!(!list_suggestions().is_empty());
    }
}
