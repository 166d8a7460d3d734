//! Rule-set resolution.
//!
//! Computes the effective rule configuration for a (language, version)
//! pair by a linear merge over the catalog in declaration order, followed
//! by one inherit-resolution pass and the caller's overrides. The whole
//! resolution is a pure function over the immutable catalog and its
//! inputs; a `BTreeMap` accumulator keeps the observable output
//! independent of any hash ordering.

use crate::catalog::{Language, RuleEntry, RuleValue};
use crate::config::{Envs, ParserOptions, SourceType};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Fully resolved rule mapping: no `Inherit` values remain.
pub type EffectiveRuleSet = BTreeMap<String, RuleValue>;

/// Offset between calendar-year and ordinal version numbering.
///
/// Catalog thresholds use the ordinal scheme in which 2015 corresponds
/// to 6, so year-style inputs are reduced by 2009.
pub const YEAR_OFFSET: u32 = 2009;

/// First version value interpreted as a calendar year.
const FIRST_YEAR: u32 = 2015;

/// Normalizes a requested version into the ordinal scheme.
///
/// Year-style values (≥ 2015) are reduced by [`YEAR_OFFSET`]. When no
/// version is given, module mode implies 6 and script mode implies 5.
#[must_use]
pub fn normalize_version(parser_options: &ParserOptions) -> u32 {
    match parser_options.ecma_version {
        Some(version) if version >= FIRST_YEAR => version - YEAR_OFFSET,
        Some(version) => version,
        None => match parser_options.source_type {
            SourceType::Module => 6,
            SourceType::Script => 5,
        },
    }
}

/// Resolves the effective rule set for a language at a normalized version.
///
/// Catalog entries are merged in declaration order (later entries win on
/// key collision), the inherit sentinels are replaced by the bare rules'
/// values (turning the bare rules off so the same concern is not reported
/// twice), and `overrides` are merged last, winning unconditionally. An
/// `Inherit` override is resolved at merge time the same way, so the
/// sentinel never reaches the output.
#[must_use]
pub fn resolve(
    catalog: &[RuleEntry],
    language: Language,
    version: u32,
    overrides: &BTreeMap<String, RuleValue>,
) -> EffectiveRuleSet {
    let mut rules = EffectiveRuleSet::new();
    for entry in catalog {
        if !entry.applies.satisfied_by(language, version) {
            continue;
        }
        for (name, value) in &entry.rules {
            rules.insert(name.clone(), value.clone());
        }
    }

    resolve_inherit(&mut rules);

    for (name, value) in overrides {
        if *value == RuleValue::Inherit {
            apply_inherit(&mut rules, name.clone());
        } else {
            rules.insert(name.clone(), value.clone());
        }
    }

    debug!(
        language = %language,
        version,
        rules = rules.len(),
        "resolved effective rule set"
    );
    rules
}

/// Replaces every `Inherit` value with the current value of the bare rule
/// of the same name (or `Off` when absent), then turns the bare rule off.
fn resolve_inherit(rules: &mut EffectiveRuleSet) {
    let inherited: Vec<String> = rules
        .iter()
        .filter(|(name, value)| name.contains('/') && **value == RuleValue::Inherit)
        .map(|(name, _)| name.clone())
        .collect();
    for name in inherited {
        apply_inherit(rules, name);
    }
}

/// Sets `name` to the current value of its bare counterpart (or `Off`
/// when absent), then turns the bare rule off. A name without a prefix
/// has no counterpart to take from and resolves to `Off` directly.
fn apply_inherit(rules: &mut EffectiveRuleSet, name: String) {
    let bare = name.rsplit('/').next().unwrap_or(&name).to_owned();
    if bare == name {
        rules.insert(name, RuleValue::Off);
        return;
    }
    let value = rules.get(&bare).cloned().unwrap_or(RuleValue::Off);
    rules.insert(name, value);
    rules.insert(bare, RuleValue::Off);
}

/// Computes the environment predefineds implied by the normalized version,
/// merged with the caller's free-form environments.
#[must_use]
pub fn base_env(envs: Option<&Envs>, version: u32) -> BTreeSet<String> {
    let mut env = BTreeSet::new();
    if version >= 12 {
        env.insert("es2021".to_owned());
    } else if version >= 11 {
        env.insert("es2020".to_owned());
    } else if version >= 8 {
        env.insert("es2017".to_owned());
    } else if version >= 6 {
        env.insert("es6".to_owned());
    }
    if let Some(envs) = envs {
        env.extend(envs.iter().map(str::to_owned));
    }
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Applicability, RuleEntry};
    use serde_json::json;

    fn test_catalog() -> Vec<RuleEntry> {
        vec![
            RuleEntry::new(
                "Base",
                Applicability::both(5),
                vec![
                    ("eol-last", RuleValue::Error),
                    ("quotes", RuleValue::ErrorWith(vec![json!("single")])),
                    ("semi", RuleValue::Error),
                    ("camelcase", RuleValue::Off),
                ],
            ),
            RuleEntry::new(
                "Base",
                Applicability::both(6),
                vec![("no-var", RuleValue::Error)],
            ),
            RuleEntry::new(
                "Base",
                Applicability::only_js(5),
                vec![("strict", RuleValue::Error)],
            ),
            RuleEntry::plugin(
                "typescript",
                "Typed rules",
                Applicability::only_ts(5),
                vec![
                    ("semi", RuleValue::Inherit),
                    ("camelcase", RuleValue::Inherit),
                    ("explicit-return", RuleValue::Error),
                    ("untracked", RuleValue::Inherit),
                ],
            ),
        ]
    }

    #[test]
    fn resolution_is_deterministic() {
        let catalog = test_catalog();
        let overrides = BTreeMap::new();
        let first = resolve(&catalog, Language::Ts, 6, &overrides);
        let second = resolve(&catalog, Language::Ts, 6, &overrides);
        assert_eq!(first, second);
        let first_json = serde_json::to_string(&first).expect("serialize");
        let second_json = serde_json::to_string(&second).expect("serialize");
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn no_inherit_survives_resolution() {
        let catalog = test_catalog();
        let resolved = resolve(&catalog, Language::Ts, 6, &BTreeMap::new());
        assert!(resolved.values().all(|v| *v != RuleValue::Inherit));
    }

    #[test]
    fn inherit_takes_bare_value_and_disables_bare_rule() {
        let catalog = test_catalog();
        let resolved = resolve(&catalog, Language::Ts, 6, &BTreeMap::new());
        assert_eq!(resolved.get("typescript/semi"), Some(&RuleValue::Error));
        assert_eq!(resolved.get("semi"), Some(&RuleValue::Off));
        // A bare rule that was already off inherits as off.
        assert_eq!(resolved.get("typescript/camelcase"), Some(&RuleValue::Off));
        assert_eq!(resolved.get("camelcase"), Some(&RuleValue::Off));
    }

    #[test]
    fn inherit_without_bare_counterpart_resolves_to_off() {
        let catalog = test_catalog();
        let resolved = resolve(&catalog, Language::Ts, 6, &BTreeMap::new());
        assert_eq!(resolved.get("typescript/untracked"), Some(&RuleValue::Off));
    }

    #[test]
    fn version_gates_are_monotonic() {
        let catalog = test_catalog();
        let at_5 = resolve(&catalog, Language::Js, 5, &BTreeMap::new());
        assert!(!at_5.contains_key("no-var"));
        for version in 6..12 {
            let resolved = resolve(&catalog, Language::Js, version, &BTreeMap::new());
            assert_eq!(resolved.get("no-var"), Some(&RuleValue::Error));
        }
    }

    #[test]
    fn language_exclusive_entries_do_not_leak() {
        let catalog = test_catalog();
        let js = resolve(&catalog, Language::Js, 6, &BTreeMap::new());
        let ts = resolve(&catalog, Language::Ts, 6, &BTreeMap::new());
        assert!(js.contains_key("strict"));
        assert!(!ts.contains_key("strict"));
        assert!(!js.contains_key("typescript/semi"));
    }

    #[test]
    fn overrides_win_over_catalog_values() {
        let catalog = test_catalog();
        let mut overrides = BTreeMap::new();
        overrides.insert("eol-last".to_owned(), RuleValue::Off);
        overrides.insert("made-up".to_owned(), RuleValue::Warn);
        let resolved = resolve(&catalog, Language::Js, 5, &overrides);
        assert_eq!(resolved.get("eol-last"), Some(&RuleValue::Off));
        assert_eq!(resolved.get("made-up"), Some(&RuleValue::Warn));
    }

    #[test]
    fn inherit_override_resolves_against_bare_rule() {
        let catalog = test_catalog();
        let mut overrides = BTreeMap::new();
        overrides.insert("extra/quotes".to_owned(), RuleValue::Inherit);
        let resolved = resolve(&catalog, Language::Js, 5, &overrides);
        assert_eq!(
            resolved.get("extra/quotes"),
            Some(&RuleValue::ErrorWith(vec![json!("single")]))
        );
        assert_eq!(resolved.get("quotes"), Some(&RuleValue::Off));
        assert!(resolved.values().all(|v| *v != RuleValue::Inherit));
        assert!(serde_json::to_string(&resolved).is_ok());
    }

    #[test]
    fn inherit_override_of_shadowed_rule_takes_the_disabled_value() {
        // The catalog's own inherit pass already turned `semi` off for the
        // typed target, so a caller re-inheriting it lands on `Off`.
        let catalog = test_catalog();
        let mut overrides = BTreeMap::new();
        overrides.insert("typescript/semi".to_owned(), RuleValue::Inherit);
        let resolved = resolve(&catalog, Language::Ts, 6, &overrides);
        assert_eq!(resolved.get("typescript/semi"), Some(&RuleValue::Off));
        assert!(resolved.values().all(|v| *v != RuleValue::Inherit));
    }

    #[test]
    fn bare_inherit_override_turns_the_rule_off() {
        let catalog = test_catalog();
        let mut overrides = BTreeMap::new();
        overrides.insert("semi".to_owned(), RuleValue::Inherit);
        let resolved = resolve(&catalog, Language::Js, 5, &overrides);
        assert_eq!(resolved.get("semi"), Some(&RuleValue::Off));
        assert!(serde_json::to_string(&resolved).is_ok());
    }

    #[test]
    fn later_entries_override_earlier_ones() {
        let catalog = vec![
            RuleEntry::new("A", Applicability::both(5), vec![("x", RuleValue::Error)]),
            RuleEntry::new("A", Applicability::both(6), vec![("x", RuleValue::Off)]),
        ];
        let at_5 = resolve(&catalog, Language::Js, 5, &BTreeMap::new());
        let at_6 = resolve(&catalog, Language::Js, 6, &BTreeMap::new());
        assert_eq!(at_5.get("x"), Some(&RuleValue::Error));
        assert_eq!(at_6.get("x"), Some(&RuleValue::Off));
    }

    #[test]
    fn year_style_versions_normalize() {
        let options = ParserOptions {
            ecma_version: Some(2015),
            ..ParserOptions::default()
        };
        assert_eq!(normalize_version(&options), 6);
        let options = ParserOptions {
            ecma_version: Some(2021),
            ..ParserOptions::default()
        };
        assert_eq!(normalize_version(&options), 12);
    }

    #[test]
    fn ordinal_versions_pass_through() {
        let options = ParserOptions {
            ecma_version: Some(9),
            ..ParserOptions::default()
        };
        assert_eq!(normalize_version(&options), 9);
    }

    #[test]
    fn missing_version_infers_from_source_type() {
        let script = ParserOptions::default();
        assert_eq!(normalize_version(&script), 5);
        let module = ParserOptions {
            source_type: SourceType::Module,
            ..ParserOptions::default()
        };
        assert_eq!(normalize_version(&module), 6);
    }

    #[test]
    fn base_env_tracks_version_tiers() {
        assert!(base_env(None, 5).is_empty());
        assert!(base_env(None, 6).contains("es6"));
        assert!(base_env(None, 8).contains("es2017"));
        assert!(base_env(None, 11).contains("es2020"));
        assert!(base_env(None, 12).contains("es2021"));
    }

    #[test]
    fn base_env_merges_caller_envs() {
        let envs = Envs::Many(vec!["node".to_owned(), "browser".to_owned()]);
        let env = base_env(Some(&envs), 6);
        assert!(env.contains("es6"));
        assert!(env.contains("node"));
        assert!(env.contains("browser"));
    }
}
