//! The seam between the pipeline and the per-language lint engines.

use crate::types::{FileResult, LintMessage, Severity};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Failure of a lint adapter on a single file.
///
/// Converted by the pipeline into a synthetic error-severity message; it
/// never aborts the batch.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct AdapterError(pub String);

/// A per-language lint adapter.
///
/// Adapters are constructed once per (language, configuration) pair and
/// shared across every file of that language within one input group, so
/// expensive construction (such as materializing a whole-program
/// type-check context) happens at most once.
pub trait Linter: Send + Sync {
    /// Whether this adapter needs the file content. The pipeline skips
    /// reading files for content-independent adapters.
    fn reads_content(&self) -> bool {
        true
    }

    /// Lints one file. `source` is `Some` unless the adapter is
    /// content-independent. Returns `None` when there is nothing to
    /// report and no fixed output.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] when the adapter itself fails on this
    /// file; the pipeline recovers per file.
    fn lint(&self, path: &Path, source: Option<&str>) -> Result<Option<FileResult>, AdapterError>;
}

/// Shared handle to a lint adapter.
pub type LinterRef = Arc<dyn Linter>;

/// Constant pseudo-adapter for files of unrecognized type.
///
/// Reports exactly one warning, never errors, never fixes, and performs
/// no I/O.
#[derive(Debug, Default)]
pub struct UnsupportedLinter;

impl Linter for UnsupportedLinter {
    fn reads_content(&self) -> bool {
        false
    }

    fn lint(&self, path: &Path, _source: Option<&str>) -> Result<Option<FileResult>, AdapterError> {
        let mut result = FileResult::new(path);
        result.push(LintMessage::new(
            1,
            1,
            Severity::Warning,
            "Unrecognized file extension",
        ));
        Ok(Some(result))
    }
}
