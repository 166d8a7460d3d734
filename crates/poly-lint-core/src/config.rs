//! Caller-facing configuration types.

use crate::catalog::RuleValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One unit of work handed to the pipeline: a set of file patterns plus
/// the options applied to every file they match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InputGroup {
    /// File-path patterns to lint (glob syntax).
    pub src: Vec<String>,

    /// Free-form environment predefineds, a single name or a list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envs: Option<Envs>,

    /// Dialect hint for the scenario adapter's keyword set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_dialect: Option<String>,

    /// Write fixed content back to the original files.
    #[serde(default)]
    pub fix: bool,

    /// Additional global identifiers to predefine.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub globals: Vec<String>,

    /// Language-version and module-mode hints.
    #[serde(default)]
    pub parser_options: ParserOptions,

    /// Raw rule overrides, merged last with the highest precedence.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleValue>,

    /// Additional rule-plugin namespaces merged with the fixed defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
}

impl InputGroup {
    /// Creates a group for the given source patterns with default options.
    #[must_use]
    pub fn new<I, S>(src: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            src: src.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Enables or disables fix application.
    #[must_use]
    pub fn fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    /// Sets the parser options.
    #[must_use]
    pub fn parser_options(mut self, parser_options: ParserOptions) -> Self {
        self.parser_options = parser_options;
        self
    }

    /// Adds a rule override.
    #[must_use]
    pub fn rule(mut self, name: impl Into<String>, value: RuleValue) -> Self {
        self.rules.insert(name.into(), value);
        self
    }
}

/// Environment predefineds: a single name or a collection of names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envs {
    /// One environment name.
    One(String),
    /// Several environment names.
    Many(Vec<String>),
}

impl Envs {
    /// Iterates over the configured environment names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::One(name) => std::slice::from_ref(name).iter(),
            Self::Many(names) => names.iter(),
        }
        .map(String::as_str)
    }
}

/// How source files should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Top-level code in script mode.
    #[default]
    Script,
    /// Module syntax requested.
    Module,
}

/// Language-version and module-mode hints for the per-language adapters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParserOptions {
    /// Requested language version, either a small ordinal or a
    /// calendar-style year (normalized by the resolver).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecma_version: Option<u32>,

    /// Module-mode hint; influences the inferred default version.
    #[serde(default)]
    pub source_type: SourceType,

    /// Project manifest for typed-language whole-program checking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<PathBuf>,
}
