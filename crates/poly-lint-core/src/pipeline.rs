//! The dispatch pipeline: glob expansion, parallel per-file linting,
//! fix write-back, and aggregation.

use crate::catalog::RuleEntry;
use crate::config::InputGroup;
use crate::linter::Linter;
use crate::registry::LinterRegistry;
use crate::report;
use crate::types::{FileResult, LintMessage, Severity, Verdict};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced by the pipeline entry points.
#[derive(Debug, Error)]
pub enum LintError {
    /// A source pattern is not valid glob syntax. This is a caller
    /// contract violation, not a lint finding, and aborts the run.
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Writing fixed content back to a file failed.
    #[error("Failed to write fixed output to {path}: {source}")]
    WriteBack {
        /// File that could not be rewritten.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The run completed and found errors. This is expected control
    /// flow, not a defect in the tool; callers should present it
    /// without a backtrace.
    #[error("Failed with {errors} {}", plural(*.errors))]
    Failed {
        /// Total error count over all files.
        errors: usize,
    },
}

fn plural(errors: usize) -> &'static str {
    if errors == 1 {
        "error"
    } else {
        "errors"
    }
}

/// Drives the full lint run over a set of input groups.
///
/// Holds only a reference to the immutable rule catalog; every per-run
/// state (registries, adapter caches) is created inside one call and
/// discarded when it returns, so concurrent top-level runs never share
/// anything.
pub struct Pipeline<'a> {
    catalog: &'a [RuleEntry],
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline over the given catalog.
    #[must_use]
    pub fn new(catalog: &'a [RuleEntry]) -> Self {
        Self { catalog }
    }

    /// Lints every file of every group and returns the flat result list:
    /// groups in caller order, files in glob-expansion order. Fixed
    /// output is written back before returning, so aggregation over the
    /// returned results reflects the fixed state.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Pattern`] for malformed source patterns and
    /// [`LintError::WriteBack`] when persisting a fix fails. Per-file
    /// adapter failures are converted into error-severity messages and
    /// never abort the run.
    pub fn execute(&self, groups: &[InputGroup]) -> Result<Vec<FileResult>, LintError> {
        let mut results = Vec::new();
        for group in groups {
            let files = expand_patterns(&group.src)?;
            debug!(files = files.len(), "expanded input group");
            let registry = LinterRegistry::new(group, self.catalog);
            // Parallel fan-out; positional collect keeps the glob order
            // regardless of completion order.
            let group_results: Vec<Option<FileResult>> = files
                .par_iter()
                .map(|path| lint_file(path, &registry))
                .collect();
            results.extend(group_results.into_iter().flatten());
        }

        for result in &results {
            if let Some(output) = &result.output {
                std::fs::write(&result.file_path, output).map_err(|source| {
                    LintError::WriteBack {
                        path: result.file_path.clone(),
                        source,
                    }
                })?;
                debug!(path = %result.file_path.display(), "wrote fixed output");
            }
        }

        info!(
            files = results.len(),
            errors = report::total_error_count(&results),
            "lint run complete"
        );
        Ok(results)
    }

    /// Runs [`execute`](Self::execute) and aggregates into a verdict.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub fn run(&self, groups: &[InputGroup]) -> Result<Verdict, LintError> {
        let results = self.execute(groups)?;
        Ok(report::aggregate(&results))
    }
}

/// Programmatic entry point: lints the groups, prints the report to
/// standard output, and resolves on success.
///
/// # Errors
///
/// Returns [`LintError::Failed`] when the aggregate error count is
/// nonzero, after the report has been printed; pattern and write-back
/// errors propagate as in [`Pipeline::execute`].
pub fn lint(catalog: &[RuleEntry], groups: &[InputGroup]) -> Result<(), LintError> {
    let results = Pipeline::new(catalog).execute(groups)?;
    let verdict = report::aggregate(&results);
    if let Some(text) = &verdict.report {
        println!("{text}");
    }
    if verdict.ok {
        Ok(())
    } else {
        Err(LintError::Failed {
            errors: report::total_error_count(&results),
        })
    }
}

/// Expands the group's source patterns, preserving pattern order and the
/// traversal order within each pattern.
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, LintError> {
    let mut files = Vec::new();
    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            match entry {
                Ok(path) => files.push(path),
                Err(error) => debug!(%error, "skipping unreadable glob entry"),
            }
        }
    }
    Ok(files)
}

/// Lints one file with the adapter its extension routes to.
fn lint_file(path: &Path, registry: &LinterRegistry<'_>) -> Option<FileResult> {
    let linter = registry.get(path);
    lint_with(linter.as_ref(), path)
}

/// Runs one adapter over one file, isolating every failure (unreadable
/// content, adapter error) into the file's own result.
fn lint_with(linter: &dyn Linter, path: &Path) -> Option<FileResult> {
    let source = if linter.reads_content() {
        match std::fs::read_to_string(path) {
            Ok(source) => Some(source),
            Err(error) => {
                return Some(failure_result(path, &format!("Unable to read file: {error}")))
            }
        }
    } else {
        None
    };
    match linter.lint(path, source.as_deref()) {
        Ok(result) => result,
        Err(error) => Some(failure_result(path, &error.to_string())),
    }
}

/// Builds a synthetic single-message error result for a failed file.
fn failure_result(path: &Path, message: &str) -> FileResult {
    let mut result = FileResult::new(path);
    result.push(LintMessage::new(1, 1, Severity::Error, message));
    result
}
