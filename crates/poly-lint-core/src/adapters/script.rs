//! Adapter for the untyped scripting language and its typed superset.
//!
//! The heavy engines behind each rule are out of scope here; this adapter
//! honors a small set of text-level rules from the effective rule set
//! (enough to make the configuration observable end to end) and produces
//! fixed output for the fixable ones. It is comment-blind by design: no
//! AST is built.

use crate::catalog::Language;
use crate::config::InputGroup;
use crate::linter::{AdapterError, Linter};
use crate::resolver::{self, EffectiveRuleSet};
use crate::types::{FileResult, LintMessage, Severity};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Plugin namespaces always present for script sources.
const DEFAULT_PLUGINS: &[&str] = &["style-extra", "node"];

/// Lints script sources against a resolved rule configuration.
pub struct ScriptLinter {
    language: Language,
    fix: bool,
    rules: EffectiveRuleSet,
    env: BTreeSet<String>,
    globals: Vec<String>,
    plugins: Vec<String>,
    project: Option<PathBuf>,
}

impl ScriptLinter {
    /// Builds the adapter for one input group and target language.
    ///
    /// Resolves the effective rule set once; the adapter is then reused
    /// for every file of this language in the group. For the typed
    /// target the `project` hint is retained as the whole-program
    /// context, which is what makes this construction the expensive,
    /// memoized case.
    #[must_use]
    pub fn new(group: &InputGroup, catalog: &[crate::catalog::RuleEntry], language: Language) -> Self {
        let version = resolver::normalize_version(&group.parser_options);
        let rules = resolver::resolve(catalog, language, version, &group.rules);
        let env = resolver::base_env(group.envs.as_ref(), version);

        let mut plugins: Vec<String> = DEFAULT_PLUGINS.iter().map(|s| (*s).to_owned()).collect();
        if language == Language::Ts {
            plugins.push("typescript".to_owned());
        }
        for plugin in &group.plugins {
            if !plugins.iter().any(|p| p == plugin) {
                plugins.push(plugin.clone());
            }
        }

        let project = (language == Language::Ts)
            .then(|| group.parser_options.project.clone())
            .flatten();

        debug!(
            language = %language,
            version,
            rules = rules.len(),
            fix = group.fix,
            "constructed script adapter"
        );

        Self {
            language,
            fix: group.fix,
            rules,
            env,
            globals: group.globals.clone(),
            plugins,
            project,
        }
    }

    /// Target language of this adapter.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolved rule configuration driving this adapter.
    #[must_use]
    pub fn rules(&self) -> &EffectiveRuleSet {
        &self.rules
    }

    /// Environment predefineds in effect.
    #[must_use]
    pub fn env(&self) -> &BTreeSet<String> {
        &self.env
    }

    /// Plugin namespaces in effect.
    #[must_use]
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Additional predefined globals.
    #[must_use]
    pub fn globals(&self) -> &[String] {
        &self.globals
    }

    /// Whole-program project manifest, typed target only.
    #[must_use]
    pub fn project(&self) -> Option<&Path> {
        self.project.as_deref()
    }

    fn rule_severity(&self, name: &str) -> Option<Severity> {
        self.rules.get(name).and_then(|value| value.severity())
    }

    /// Preferred quote character, from the `quotes` rule options.
    fn preferred_quote(&self) -> char {
        match self
            .rules
            .get("quotes")
            .and_then(|value| value.options().first())
            .and_then(|opt| opt.as_str())
        {
            Some("single") => '\'',
            _ => '"',
        }
    }
}

impl Linter for ScriptLinter {
    fn lint(&self, path: &Path, source: Option<&str>) -> Result<Option<FileResult>, AdapterError> {
        let source =
            source.ok_or_else(|| AdapterError("script adapter requires file content".into()))?;

        let mut result = FileResult::new(path);
        let mut fixed: Option<String> = self.fix.then(|| source.to_owned());

        if let Some(severity) = self.rule_severity("quotes") {
            check_quotes(source, self.preferred_quote(), severity, &mut result, &mut fixed);
        }
        if let Some(severity) = self.rule_severity("no-tabs") {
            check_no_tabs(source, severity, &mut result);
        }
        if let Some(severity) = self.rule_severity("eol-last") {
            check_eol_last(source, severity, &mut result, &mut fixed);
        }

        if let Some(fixed) = fixed {
            if fixed != source {
                result.output = Some(fixed);
            }
        }

        if result.is_empty() {
            Ok(None)
        } else {
            Ok(Some(result))
        }
    }
}

/// A string literal found by the line scanner.
struct Literal {
    line: usize,
    column: usize,
    /// Byte offset of the opening quote within the whole source.
    start: usize,
    /// Byte offset of the closing quote within the whole source.
    end: usize,
    /// Literal body between the quotes.
    body: String,
}

/// Scans for string literals written with the wrong quote character.
/// Literals whose body contains the preferred quote or an escape are
/// reported but not fixed.
fn check_quotes(
    source: &str,
    preferred: char,
    severity: Severity,
    result: &mut FileResult,
    fixed: &mut Option<String>,
) {
    let wrong = if preferred == '\'' { '"' } else { '\'' };
    let style = if preferred == '\'' {
        "singlequote"
    } else {
        "doublequote"
    };

    let mut edits: Vec<(usize, usize)> = Vec::new();
    for literal in scan_literals(source, wrong, preferred) {
        let fixable = !literal.body.contains(preferred) && !literal.body.contains('\\');
        if fixable && fixed.is_some() {
            edits.push((literal.start, literal.end));
        } else {
            result.push(
                LintMessage::new(
                    literal.line,
                    literal.column,
                    severity,
                    format!("Strings must use {style}."),
                )
                .with_rule("quotes"),
            );
        }
    }

    if let Some(fixed) = fixed {
        // Quote positions are stable under single-character replacement,
        // so edits apply in any order; keep source order for clarity.
        for (start, end) in edits {
            fixed.replace_range(start..=start, &preferred.to_string());
            fixed.replace_range(end..=end, &preferred.to_string());
        }
    }
}

/// Collects literals quoted with `wrong`, skipping over literals quoted
/// with `preferred` so quotes nested in the other style are not flagged.
fn scan_literals(source: &str, wrong: char, preferred: char) -> Vec<Literal> {
    let mut literals = Vec::new();
    let mut line_start = 0;
    for (line_no, line) in source.split_inclusive('\n').enumerate() {
        let mut chars = line.char_indices();
        let mut column = 0;
        while let Some((offset, ch)) = chars.next() {
            column += 1;
            if ch == preferred || ch == wrong {
                let open_column = column;
                let open_offset = offset;
                let mut body = String::new();
                let mut close_offset = None;
                while let Some((inner_offset, inner)) = chars.next() {
                    column += 1;
                    if inner == '\\' {
                        body.push(inner);
                        if let Some((_, escaped)) = chars.next() {
                            column += 1;
                            body.push(escaped);
                        }
                    } else if inner == ch {
                        close_offset = Some(inner_offset);
                        break;
                    } else {
                        body.push(inner);
                    }
                }
                if let Some(close_offset) = close_offset {
                    if ch == wrong {
                        literals.push(Literal {
                            line: line_no + 1,
                            column: open_column,
                            start: line_start + open_offset,
                            end: line_start + close_offset,
                            body,
                        });
                    }
                }
            }
        }
        line_start += line.len();
    }
    literals
}

fn check_no_tabs(source: &str, severity: Severity, result: &mut FileResult) {
    for (line_no, line) in source.lines().enumerate() {
        for (column, ch) in line.chars().enumerate() {
            if ch == '\t' {
                result.push(
                    LintMessage::new(line_no + 1, column + 1, severity, "Unexpected tab character.")
                        .with_rule("no-tabs"),
                );
            }
        }
    }
}

fn check_eol_last(
    source: &str,
    severity: Severity,
    result: &mut FileResult,
    fixed: &mut Option<String>,
) {
    if source.is_empty() || source.ends_with('\n') {
        return;
    }
    if let Some(fixed) = fixed {
        if !fixed.ends_with('\n') {
            fixed.push('\n');
        }
        return;
    }
    let line = source.lines().count();
    let column = source.lines().last().map_or(0, |l| l.chars().count()) + 1;
    result.push(
        LintMessage::new(
            line,
            column,
            severity,
            "Newline required at end of file but not found.",
        )
        .with_rule("eol-last"),
    );
}
