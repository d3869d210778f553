//! Deterministic report rendering.
//!
//! Both renderings depend only on the report contents and the suggestion
//! registry: identical input produces byte-identical output, so reports can
//! be diffed or snapshot-tested across runs.

use super::{get_suggestion, CompatibilityReport};

impl CompatibilityReport {
    /// Renders the report as plain text, one block per target.
    ///
    /// Each violation line is followed by a remediation hint when the
    /// suggestion registry holds one for its code.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = self.summary();
        out.push('\n');

        let mut current_target: Option<&str> = None;
        for violation in &self.violations {
            if current_target != Some(violation.target.as_str()) {
                current_target = Some(violation.target.as_str());
                out.push('\n');
                out.push_str(&violation.target);
                out.push_str(":\n");
            }
            out.push_str("  [");
            out.push_str(violation.kind.code());
            out.push_str("] ");
            out.push_str(&violation.message);
            if let Some(wrapper) = &violation.suggested_wrapper {
                out.push_str(" (suggested wrapper: ");
                out.push_str(wrapper);
                out.push(')');
            }
            out.push('\n');
            if let Some(step) = get_suggestion(violation.kind.code())
                .and_then(|s| s.fix_steps.into_iter().next())
            {
                out.push_str("    hint: ");
                out.push_str(&step);
                out.push('\n');
            }
        }

        out
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the report cannot be encoded, which
    /// does not happen for reports built by this crate.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
