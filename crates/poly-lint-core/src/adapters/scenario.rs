//! Adapter for the structured plain-text scenario format.
//!
//! Line-oriented validation only: the file must open with a `Feature:`
//! header (after any tags and comments), and content appearing before it
//! is reported per line. Everything below the header is accepted, which
//! keeps this a format check rather than a full grammar.

use crate::config::InputGroup;
use crate::linter::{AdapterError, Linter};
use crate::types::{FileResult, LintMessage, Severity};
use std::path::Path;

/// Validates scenario files.
#[derive(Debug, Default)]
pub struct ScenarioLinter {
    dialect: Option<String>,
}

impl ScenarioLinter {
    /// Builds the adapter for one input group, keeping the group's
    /// dialect hint.
    #[must_use]
    pub fn new(group: &InputGroup) -> Self {
        Self {
            dialect: group.default_dialect.clone(),
        }
    }

    /// Dialect hint for the keyword set, when configured.
    #[must_use]
    pub fn dialect(&self) -> Option<&str> {
        self.dialect.as_deref()
    }
}

impl Linter for ScenarioLinter {
    fn lint(&self, path: &Path, source: Option<&str>) -> Result<Option<FileResult>, AdapterError> {
        let source =
            source.ok_or_else(|| AdapterError("scenario adapter requires file content".into()))?;

        let mut result = FileResult::new(path);
        let mut seen_feature = false;
        let mut seen_content = false;
        let mut in_docstring = false;

        for (line_no, line) in source.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("\"\"\"") || trimmed.starts_with("```") {
                in_docstring = !in_docstring;
                continue;
            }
            if in_docstring || trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            seen_content = true;
            if trimmed.starts_with('@') {
                continue;
            }
            if trimmed.starts_with("Feature:") {
                seen_feature = true;
                continue;
            }
            if !seen_feature {
                let column = line.chars().count() - trimmed.chars().count() + 1;
                result.push(LintMessage::new(
                    line_no + 1,
                    column,
                    Severity::Error,
                    "expected a 'Feature:' header before this line",
                ));
            }
            // Below the header, keywords and free description lines are
            // both accepted.
        }

        if seen_content && !seen_feature && result.messages.is_empty() {
            result.push(LintMessage::new(
                1,
                1,
                Severity::Error,
                "unexpected end of file, no 'Feature:' header found",
            ));
        }

        if result.is_empty() {
            Ok(None)
        } else {
            Ok(Some(result))
        }
    }
}
