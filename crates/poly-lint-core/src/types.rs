//! Core types for lint messages and per-file results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level of a single lint message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported but never fails the run.
    Warning,
    /// Fails the run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One problem reported by a linter for one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintMessage {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Human-readable message.
    pub message: String,
    /// Severity of this message.
    pub severity: Severity,
    /// Identifier of the rule that produced this message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

impl LintMessage {
    /// Creates a new message.
    #[must_use]
    pub fn new(
        line: usize,
        column: usize,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            message: message.into(),
            severity,
            rule_id: None,
        }
    }

    /// Attaches a rule identifier to this message.
    #[must_use]
    pub fn with_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }
}

/// Outcome of linting one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    /// Path of the linted file.
    pub file_path: PathBuf,
    /// Number of error-severity messages.
    pub error_count: usize,
    /// Number of warning-severity messages.
    pub warning_count: usize,
    /// Messages in source order.
    pub messages: Vec<LintMessage>,
    /// Fixed source text, present only when fixing was requested and
    /// the fixed text differs from the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl FileResult {
    /// Creates an empty result for a file.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            error_count: 0,
            warning_count: 0,
            messages: Vec::new(),
            output: None,
        }
    }

    /// Appends a message, updating the severity counters.
    pub fn push(&mut self, message: LintMessage) {
        match message.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.messages.push(message);
    }

    /// Sets the fixed output text.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// True when this result carries nothing worth reporting or writing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.output.is_none()
    }
}

/// Aggregate outcome of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// True iff no error-severity message was produced by any file.
    pub ok: bool,
    /// Grouped textual report, or `None` when there is nothing to show.
    pub report: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_updates_counters() {
        let mut result = FileResult::new("a.js");
        result.push(LintMessage::new(1, 1, Severity::Error, "bad"));
        result.push(LintMessage::new(2, 1, Severity::Warning, "meh"));
        assert_eq!(result.error_count, 1);
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn empty_result_is_empty() {
        let result = FileResult::new("a.js");
        assert!(result.is_empty());
    }

    #[test]
    fn result_with_output_is_not_empty() {
        let result = FileResult::new("a.js").with_output("fixed\n");
        assert!(!result.is_empty());
    }

    #[test]
    fn severity_orders_error_above_warning() {
        assert!(Severity::Error > Severity::Warning);
    }
}
