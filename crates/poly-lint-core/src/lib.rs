//! # poly-lint-core
//!
//! Core engine for poly-lint: resolves curated rule configurations for a
//! target language and version, routes files to per-language lint
//! adapters, runs the adapters in parallel, and aggregates everything
//! into one verdict with optional auto-fix write-back.
//!
//! The pieces:
//!
//! - [`RuleEntry`] / [`RuleValue`] - the catalog data model
//! - [`resolver`] - effective rule-set computation
//! - [`LinterRegistry`] - extension routing and adapter memoization
//! - [`Pipeline`] - glob expansion, fan-out, fix write-back
//! - [`report`] - aggregate verdict and textual report
//!
//! ## Example
//!
//! ```ignore
//! use poly_lint_core::{lint, InputGroup};
//!
//! let group = InputGroup::new(["src/**/*.js"]).fix(true);
//! lint(&catalog, &[group])?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod adapters;
mod catalog;
mod config;
mod linter;
mod pipeline;
mod registry;

/// Rule-set resolution.
pub mod resolver;

/// Verdict aggregation and report formatting.
pub mod report;

mod types;

pub use catalog::{Applicability, Language, RuleEntry, RuleValue};
pub use config::{Envs, InputGroup, ParserOptions, SourceType};
pub use linter::{AdapterError, Linter, LinterRef, UnsupportedLinter};
pub use pipeline::{lint, LintError, Pipeline};
pub use registry::{file_kind, FileKind, LinterRegistry};
pub use resolver::{normalize_version, resolve, EffectiveRuleSet, YEAR_OFFSET};
pub use types::{FileResult, LintMessage, Severity, Verdict};
