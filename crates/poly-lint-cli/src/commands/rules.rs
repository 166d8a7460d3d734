//! Rules command implementation.

use anyhow::{Context, Result};
use poly_lint_core::{normalize_version, resolve, Language, ParserOptions};
use poly_lint_rules::default_catalog;
use std::collections::BTreeMap;

/// Prints the effective rule set for a language and version as JSON.
pub fn run(language: Language, ecma_version: Option<u32>) -> Result<()> {
    let options = ParserOptions {
        ecma_version,
        ..ParserOptions::default()
    };
    let version = normalize_version(&options);
    let resolved = resolve(default_catalog(), language, version, &BTreeMap::new());

    tracing::info!(
        "{} rules configured for {} at version {}",
        resolved.len(),
        language,
        version
    );

    let json = serde_json::to_string_pretty(&resolved).context("Failed to encode rule set")?;
    println!("{json}");

    Ok(())
}
