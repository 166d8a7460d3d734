//! Check command implementation.

use anyhow::{bail, Context, Result};
use poly_lint_core::{report, InputGroup, Pipeline, SourceType};
use poly_lint_rules::default_catalog;
use serde::Deserialize;
use std::fs;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Options collected from the `check` subcommand flags.
#[derive(Debug)]
pub struct CheckOptions {
    /// Command-line file patterns; non-empty overrides the config file.
    pub patterns: Vec<String>,
    /// Force fix application on every group.
    pub fix: bool,
    /// Language-version override.
    pub ecma_version: Option<u32>,
    /// Source-interpretation override.
    pub source_type: Option<SourceType>,
    /// Output format.
    pub format: OutputFormat,
}

/// Shape of the configuration file: one `[[group]]` table per input group.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    group: Vec<InputGroup>,
}

/// Runs the check command.
pub fn run(options: &CheckOptions, source: &ConfigSource) -> Result<()> {
    let mut groups = if options.patterns.is_empty() {
        load_groups(source)?
    } else {
        vec![InputGroup::new(options.patterns.iter().cloned())]
    };

    if groups.is_empty() {
        bail!("nothing to lint: pass file patterns or declare [[group]] in poly-lint.toml");
    }

    for group in &mut groups {
        if options.fix {
            group.fix = true;
        }
        if let Some(version) = options.ecma_version {
            group.parser_options.ecma_version = Some(version);
        }
        if let Some(source_type) = options.source_type {
            group.parser_options.source_type = source_type;
        }
    }

    tracing::info!("Linting {} group(s)", groups.len());

    let catalog = default_catalog();
    let results = Pipeline::new(catalog)
        .execute(&groups)
        .context("Lint run failed")?;
    let verdict = report::aggregate(&results);

    super::output::print(&results, &verdict, options.format)?;

    // Exit with error code if there are errors
    if !verdict.ok {
        std::process::exit(1);
    }

    Ok(())
}

fn load_groups(source: &ConfigSource) -> Result<Vec<InputGroup>> {
    let Some(path) = source.path() else {
        return Ok(Vec::new());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(file.group)
}
