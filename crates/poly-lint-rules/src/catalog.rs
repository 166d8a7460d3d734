//! The rule catalog data.
//!
//! Entries are merged in declaration order: base entries first, then
//! version-gated refinements, then the plugin overlays. Thresholds are in
//! the ordinal version scheme. Entry order is an invariant the resolver
//! depends on; append refinements after the entry they refine.

use poly_lint_core::{Applicability, RuleEntry, RuleValue};
use serde_json::{json, Value};
use std::sync::OnceLock;

/// Namespace prefix of the typed-language rule overlay.
pub const TYPESCRIPT_PLUGIN: &str = "typescript";

/// Namespace prefix of the in-house stylistic rules.
const STYLE_EXTRA_PLUGIN: &str = "style-extra";

fn off() -> RuleValue {
    RuleValue::Off
}

fn error() -> RuleValue {
    RuleValue::Error
}

fn error_with<const N: usize>(opts: [Value; N]) -> RuleValue {
    RuleValue::ErrorWith(opts.to_vec())
}

fn inherit() -> RuleValue {
    RuleValue::Inherit
}

/// Returns the catalog, built once on first use.
#[must_use]
pub fn default_catalog() -> &'static [RuleEntry] {
    static CATALOG: OnceLock<Vec<RuleEntry>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

#[allow(clippy::too_many_lines)] // constant data, one entry per block
fn build_catalog() -> Vec<RuleEntry> {
    vec![
        RuleEntry::new(
            "Possible Errors",
            Applicability::both(5),
            vec![
                ("for-direction", error()),
                ("getter-return", error()),
                ("no-async-promise-executor", error()),
                ("no-await-in-loop", error()),
                ("no-compare-neg-zero", error()),
                ("no-cond-assign", off()),
                ("no-console", off()),
                ("no-constant-condition", error()),
                ("no-control-regex", off()),
                ("no-debugger", error()),
                ("no-dupe-args", error()),
                ("no-dupe-keys", error()),
                ("no-duplicate-case", error()),
                ("no-empty", error_with([json!({ "allowEmptyCatch": true })])),
                ("no-empty-character-class", error()),
                ("no-ex-assign", error()),
                ("no-extra-boolean-cast", error()),
                ("no-extra-parens", error()),
                ("no-extra-semi", error()),
                ("no-func-assign", error()),
                ("no-inner-declarations", error()),
                ("no-invalid-regexp", error()),
                ("no-irregular-whitespace", error()),
                ("no-misleading-character-class", error()),
                ("no-obj-calls", error()),
                ("no-prototype-builtins", off()),
                ("no-regex-spaces", off()),
                ("no-sparse-arrays", off()),
                ("no-template-curly-in-string", off()),
                ("no-unexpected-multiline", off()),
                ("no-unreachable", error()),
                ("no-unsafe-finally", error()),
                ("no-unsafe-negation", error()),
                ("require-atomic-updates", error()),
                ("use-isnan", error()),
                ("valid-typeof", error()),
            ],
        ),
        RuleEntry::new(
            "Possible Errors",
            Applicability::both(6),
            vec![("no-inner-declarations", off())],
        ),
        RuleEntry::new(
            "Best Practices",
            Applicability::both(5),
            vec![
                ("accessor-pairs", error()),
                ("array-callback-return", off()),
                ("block-scoped-var", off()),
                ("class-methods-use-this", off()),
                ("complexity", off()),
                ("consistent-return", off()),
                ("curly", error_with([json!("multi-or-nest")])),
                ("default-case", off()),
                ("dot-location", error_with([json!("property")])),
                ("dot-notation", error()),
                ("eqeqeq", error_with([json!("allow-null")])),
                ("guard-for-in", off()),
                ("max-classes-per-file", off()),
                ("no-alert", error()),
                ("no-caller", error()),
                ("no-case-declarations", error()),
                ("no-div-regex", error()),
                ("no-else-return", error()),
                ("no-empty-function", off()),
                ("no-empty-pattern", error()),
                ("no-eq-null", off()),
                ("no-eval", off()),
                ("no-extend-native", error()),
                ("no-extra-bind", error()),
                ("no-extra-label", error()),
                ("no-fallthrough", error()),
                ("no-floating-decimal", error()),
                ("no-global-assign", error()),
                ("no-implicit-coercion", off()),
                ("no-implicit-globals", off()),
                ("no-implied-eval", error()),
                ("no-invalid-this", off()),
                ("no-iterator", error()),
                (
                    "no-labels",
                    error_with([json!({ "allowLoop": true, "allowSwitch": true })]),
                ),
                ("no-lone-blocks", error()),
                ("no-loop-func", error()),
                ("no-magic-numbers", off()),
                ("no-multi-spaces", off()),
                ("no-multi-str", error()),
                ("no-new", off()),
                ("no-new-func", off()),
                ("no-new-wrappers", error()),
                ("no-octal", error()),
                ("no-octal-escape", error()),
                ("no-param-reassign", off()),
                ("no-proto", off()),
                ("no-restricted-properties", off()),
                ("no-return-assign", error_with([json!("always")])),
                ("no-return-await", error()),
                ("no-script-url", error()),
                ("no-self-assign", error()),
                ("no-self-compare", off()),
                ("no-sequences", error()),
                ("no-throw-literal", error()),
                ("no-unmodified-loop-condition", error()),
                ("no-unused-expressions", error()),
                ("no-unused-labels", error()),
                ("no-useless-call", error()),
                ("no-useless-catch", error()),
                ("no-useless-concat", error()),
                ("no-useless-escape", error()),
                ("no-useless-return", error()),
                ("no-void", off()),
                ("no-warning-comments", error()),
                ("no-with", error()),
                ("prefer-promise-reject-errors", off()),
                ("radix", error()),
                ("require-await", error()),
                ("require-unicode-regexp", off()),
                ("vars-on-top", off()),
                ("wrap-iife", off()),
                ("yoda", error()),
            ],
        ),
        RuleEntry::new(
            "Best Practices",
            Applicability::both(6),
            vec![("no-proto", error())],
        ),
        RuleEntry::new(
            "Best Practices",
            Applicability::only_js(5),
            // Redeclarations are acceptable in the typed language.
            vec![(
                "no-redeclare",
                error_with([json!({ "builtinGlobals": true })]),
            )],
        ),
        RuleEntry::new(
            "Best Practices",
            Applicability::any_lang(9),
            vec![("prefer-named-capture-group", error())],
        ),
        RuleEntry::new(
            "Strict Mode",
            Applicability::only_js(5),
            // Strict-mode directives are redundant in the typed language.
            vec![("strict", error_with([json!("global")]))],
        ),
        RuleEntry::new(
            "Variables",
            Applicability::both(5),
            vec![
                ("init-declarations", off()),
                ("no-delete-var", error()),
                ("no-label-var", error()),
                ("no-restricted-globals", error()),
                ("no-shadow", off()),
                ("no-shadow-restricted-names", error()),
                ("no-undef-init", error()),
                ("no-undefined", off()),
                ("no-unused-vars", error_with([json!({ "vars": "local" })])),
                ("no-use-before-define", off()),
            ],
        ),
        RuleEntry::new(
            "Variables",
            Applicability::only_js(5),
            // The typed checker flags undefined names itself.
            vec![("no-undef", error())],
        ),
        RuleEntry::new(
            "Variables",
            Applicability::both(10),
            vec![(
                "no-unused-vars",
                error_with([json!({ "caughtErrors": "all", "vars": "local" })]),
            )],
        ),
        RuleEntry::new(
            "Variables",
            Applicability::only_ts(5),
            // Unused rest parameters may exist solely to type the
            // arguments object.
            vec![(
                "no-unused-vars",
                error_with([json!({ "args": "none", "caughtErrors": "all", "vars": "local" })]),
            )],
        ),
        RuleEntry::new(
            "Node.js and CommonJS",
            Applicability::both(5),
            vec![
                ("callback-return", off()),
                ("global-require", off()),
                ("handle-callback-err", error()),
                ("no-buffer-constructor", off()),
                ("no-mixed-requires", error()),
                ("no-new-require", error()),
                ("no-path-concat", error()),
                ("no-process-env", error()),
                ("no-process-exit", error()),
                ("no-restricted-modules", error()),
                ("no-sync", off()),
            ],
        ),
        RuleEntry::new(
            "Stylistic Issues",
            Applicability::both(5),
            vec![
                ("array-bracket-newline", error_with([json!("consistent")])),
                ("array-bracket-spacing", error()),
                ("array-element-newline", off()),
                ("block-spacing", error()),
                ("brace-style", error_with([json!("allman")])),
                ("camelcase", off()),
                ("capitalized-comments", off()),
                ("comma-dangle", error_with([json!("always-multiline")])),
                ("comma-spacing", error()),
                (
                    "comma-style",
                    error_with([
                        json!("last"),
                        json!({ "exceptions": { "ArrayExpression": true } }),
                    ]),
                ),
                ("computed-property-spacing", error()),
                ("consistent-this", off()),
                ("eol-last", error()),
                ("func-call-spacing", off()),
                ("func-name-matching", off()),
                ("func-names", error_with([json!("never")])),
                ("func-style", off()),
                ("function-paren-newline", error_with([json!("consistent")])),
                ("id-blacklist", off()),
                ("id-length", off()),
                // Encourage abbreviations: "char", "obj", "param", "str".
                (
                    "id-match",
                    error_with([json!(
                        "^(?!(characters?|objects?|parameters?|strings?)(?![_a-z]))"
                    )]),
                ),
                ("implicit-arrow-linebreak", off()),
                (
                    "indent",
                    error_with([
                        json!(4),
                        json!({
                            "CallExpression": { "arguments": "first" },
                            "FunctionDeclaration": { "parameters": "first" },
                            "FunctionExpression": { "parameters": "first" },
                            "MemberExpression": 0,
                            "VariableDeclarator": 0,
                            "ignoredNodes": [
                                "ArrowFunctionExpression",
                                "ClassDeclaration[superClass]",
                                "ConditionalExpression",
                                "ImportDeclaration",
                            ],
                        }),
                    ]),
                ),
                ("jsx-quotes", error()),
                ("key-spacing", error_with([json!({ "mode": "minimum" })])),
                ("keyword-spacing", error()),
                ("line-comment-position", off()),
                ("linebreak-style", error()),
                ("lines-between-class-members", off()),
                ("max-depth", off()),
                ("max-len", error_with([json!({ "code": 100 })])),
                ("max-lines", off()),
                ("max-lines-per-function", off()),
                ("max-nested-callbacks", error()),
                ("max-params", off()),
                ("max-statements", off()),
                ("max-statements-per-line", error()),
                ("multiline-comment-style", off()),
                ("multiline-ternary", off()),
                ("new-cap", error_with([json!({ "capIsNew": false })])),
                ("new-parens", error()),
                ("newline-per-chained-call", off()),
                ("no-array-constructor", error()),
                ("no-bitwise", off()),
                ("no-continue", off()),
                ("no-inline-comments", off()),
                ("no-lonely-if", off()),
                ("no-mixed-operators", off()),
                ("no-mixed-spaces-and-tabs", off()),
                ("no-multi-assign", off()),
                ("no-multiple-empty-lines", error_with([json!({ "max": 1 })])),
                ("no-negated-condition", off()),
                ("no-nested-ternary", off()),
                ("no-new-object", error()),
                ("no-plusplus", off()),
                ("no-restricted-syntax", error()),
                ("no-tabs", error()),
                ("no-ternary", off()),
                ("no-trailing-spaces", error()),
                ("no-underscore-dangle", off()),
                ("no-unneeded-ternary", error()),
                ("no-whitespace-before-property", error()),
                ("nonblock-statement-body-position", off()),
                ("object-curly-newline", off()),
                ("object-curly-spacing", error_with([json!("always")])),
                (
                    "object-property-newline",
                    error_with([json!({ "allowMultiplePropertiesPerLine": true })]),
                ),
                ("one-var", error_with([json!("never")])),
                ("one-var-declaration-per-line", error()),
                ("operator-assignment", error()),
                ("operator-linebreak", error_with([json!("after")])),
                ("padded-blocks", error_with([json!("never")])),
                (
                    "padding-line-between-statements",
                    error_with([
                        json!({
                            "blankLine": "always",
                            "prev": "*",
                            "next": ["class", "directive", "export", "function", "import"],
                        }),
                        json!({
                            "blankLine": "always",
                            "prev": ["class", "directive", "export", "function", "import"],
                            "next": "*",
                        }),
                        json!({ "blankLine": "any", "prev": "export", "next": "export" }),
                        json!({ "blankLine": "any", "prev": "import", "next": "import" }),
                    ]),
                ),
                ("prefer-object-spread", off()),
                ("quote-props", off()),
                ("quotes", error_with([json!("single")])),
                ("semi", error()),
                ("semi-style", error()),
                ("semi-spacing", error()),
                ("sort-keys", off()),
                ("sort-vars", off()),
                ("space-before-blocks", error()),
                ("space-before-function-paren", off()),
                ("space-in-parens", error()),
                ("space-infix-ops", error()),
                ("space-unary-ops", error()),
                ("spaced-comment", error()),
                (
                    "switch-colon-spacing",
                    error_with([json!({ "after": true, "before": false })]),
                ),
                ("template-tag-spacing", error_with([json!("always")])),
                ("unicode-bom", error()),
                ("wrap-regex", off()),
            ],
        ),
        RuleEntry::new(
            "Stylistic Issues",
            Applicability::only_js(5),
            // In typed sources this rule misfires at the start of blocks.
            vec![(
                "lines-around-comment",
                error_with([json!({ "allowBlockStart": true, "allowObjectStart": true })]),
            )],
        ),
        RuleEntry::new(
            "Stylistic Issues",
            Applicability::both(8),
            vec![(
                "comma-dangle",
                error_with([json!({
                    "arrays": "always-multiline",
                    "objects": "always-multiline",
                    "imports": "always-multiline",
                    "exports": "always-multiline",
                    "functions": "always-multiline",
                })]),
            )],
        ),
        RuleEntry::new(
            "Stylistic Issues",
            Applicability::both(9),
            vec![("prefer-object-spread", error())],
        ),
        RuleEntry::new(
            "ECMAScript 6",
            Applicability::both(6),
            vec![
                ("arrow-body-style", error()),
                ("arrow-parens", error_with([json!("as-needed")])),
                ("arrow-spacing", error()),
                ("constructor-super", error()),
                ("generator-star-spacing", error_with([json!("both")])),
                ("no-class-assign", error()),
                ("no-confusing-arrow", off()),
                ("no-const-assign", off()),
                ("no-dupe-class-members", error()),
                ("no-duplicate-imports", error()),
                ("no-new-symbol", error()),
                ("no-restricted-imports", off()),
                ("no-this-before-super", error()),
                ("no-useless-computed-key", error()),
                ("no-useless-constructor", error()),
                ("no-useless-rename", error()),
                ("no-var", error()),
                ("object-shorthand", error()),
                ("prefer-arrow-callback", error()),
                ("prefer-const", error()),
                ("prefer-destructuring", error()),
                ("prefer-numeric-literals", error()),
                ("prefer-spread", error()),
                ("prefer-template", error()),
                ("require-yield", error()),
                ("rest-spread-spacing", error()),
                (
                    "sort-imports",
                    error_with([json!({ "ignoreDeclarationSort": true })]),
                ),
                ("symbol-description", off()),
                ("template-curly-spacing", error()),
                ("yield-star-spacing", error_with([json!("both")])),
            ],
        ),
        RuleEntry::new(
            "ECMAScript 6",
            Applicability::any_lang(6),
            vec![("prefer-rest-params", error())],
        ),
        RuleEntry::plugin(
            TYPESCRIPT_PLUGIN,
            "Typed Language Overlay",
            Applicability::only_ts(5),
            vec![
                ("adjacent-overload-signatures", error()),
                ("array-type", off()),
                ("await-thenable", error()),
                ("ban-ts-ignore", off()),
                ("ban-types", off()),
                ("camelcase", inherit()),
                ("class-name-casing", off()),
                (
                    "consistent-type-definitions",
                    error_with([json!("interface")]),
                ),
                ("explicit-function-return-type", error()),
                ("explicit-member-accessibility", error()),
                ("func-call-spacing", inherit()),
                ("generic-type-naming", off()),
                // The overlay's indent handling is flawed; keep it off.
                ("indent", off()),
                ("interface-name-prefix", off()),
                (
                    "member-delimiter-style",
                    error_with([json!({ "singleline": { "requireLast": true } })]),
                ),
                ("member-naming", off()),
                ("member-ordering", error()),
                ("no-angle-bracket-type-assertion", error()),
                ("no-array-constructor", inherit()),
                ("no-empty-function", inherit()),
                ("no-empty-interface", error()),
                ("no-explicit-any", off()),
                ("no-extra-parens", inherit()),
                ("no-extraneous-class", error()),
                ("no-floating-promises", error()),
                ("no-for-in-array", error()),
                ("no-inferrable-types", error()),
                ("no-magic-numbers", inherit()),
                ("no-misused-new", error()),
                ("no-misused-promises", error()),
                ("no-namespace", error()),
                ("no-non-null-assertion", error()),
                ("no-object-literal-type-assertion", error()),
                ("no-parameter-properties", off()),
                ("no-this-alias", off()),
                ("no-type-alias", off()),
                ("no-unnecessary-qualifier", error()),
                ("no-unnecessary-type-assertion", error()),
                // Rest parameters can be accessed through the arguments
                // object.
                ("no-unused-vars", inherit()),
                ("no-use-before-define", inherit()),
                ("no-useless-constructor", inherit()),
                ("no-var-requires", error()),
                ("prefer-function-type", error()),
                ("prefer-for-of", error()),
                ("prefer-includes", error()),
                ("prefer-namespace-keyword", off()),
                ("prefer-readonly", error()),
                ("prefer-regexp-exec", error()),
                (
                    "promise-function-async",
                    error_with([json!({ "allowAny": true })]),
                ),
                ("require-array-sort-compare", off()),
                ("require-await", inherit()),
                ("restrict-plus-operands", off()),
                ("semi", inherit()),
                ("strict-boolean-expressions", off()),
                (
                    "triple-slash-reference",
                    error_with([json!({ "lib": "never", "types": "never" })]),
                ),
                ("type-annotation-spacing", error()),
                ("unbound-method", off()),
                ("unified-signatures", error()),
            ],
        ),
        RuleEntry::plugin(
            TYPESCRIPT_PLUGIN,
            "Typed Language Overlay",
            Applicability::only_ts(6),
            vec![
                ("no-require-imports", error()),
                ("prefer-string-starts-ends-with", error()),
            ],
        ),
        RuleEntry::plugin(
            STYLE_EXTRA_PLUGIN,
            "Extra Stylistic Rules",
            Applicability::both(5),
            vec![
                ("nice-space-before-function-paren", error()),
                ("no-spaces-in-call-expression", error()),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use poly_lint_core::{resolve, Language};
    use std::collections::BTreeMap;

    #[test]
    fn catalog_is_built_once() {
        let first: *const [RuleEntry] = default_catalog();
        let second: *const [RuleEntry] = default_catalog();
        assert_eq!(first, second);
    }

    #[test]
    fn every_inherit_has_a_bare_counterpart() {
        let catalog = default_catalog();
        for entry in catalog {
            for (name, value) in &entry.rules {
                if *value != RuleValue::Inherit {
                    continue;
                }
                let bare = name.rsplit('/').next().unwrap_or(name);
                let defined = catalog.iter().any(|other| {
                    other.applies.ts_min.is_some()
                        && other.rules.iter().any(|(n, v)| n == bare && *v != RuleValue::Inherit)
                });
                assert!(defined, "inherit rule `{name}` has no bare counterpart");
            }
        }
    }

    #[test]
    fn inherit_never_appears_outside_plugin_entries() {
        for entry in default_catalog() {
            for (name, value) in &entry.rules {
                if *value == RuleValue::Inherit {
                    assert!(name.contains('/'), "bare rule `{name}` declared inherit");
                }
            }
        }
    }

    #[test]
    fn no_inherit_survives_for_either_language() {
        let catalog = default_catalog();
        for language in [Language::Js, Language::Ts] {
            for version in [5, 6, 9, 12] {
                let resolved = resolve(catalog, language, version, &BTreeMap::new());
                assert!(
                    resolved.values().all(|v| *v != RuleValue::Inherit),
                    "unresolved inherit at {language} v{version}"
                );
            }
        }
    }

    #[test]
    fn typed_overlay_disables_shadowed_bare_rules() {
        let resolved = resolve(default_catalog(), Language::Ts, 6, &BTreeMap::new());
        // `semi` is shadowed by the overlay: the prefixed rule takes its
        // value and the bare rule is turned off.
        assert_eq!(resolved.get("typescript/semi"), Some(&RuleValue::Error));
        assert_eq!(resolved.get("semi"), Some(&RuleValue::Off));
    }

    #[test]
    fn strict_mode_is_untyped_only() {
        let js = resolve(default_catalog(), Language::Js, 5, &BTreeMap::new());
        let ts = resolve(default_catalog(), Language::Ts, 5, &BTreeMap::new());
        assert!(js.get("strict").is_some_and(RuleValue::is_active));
        assert!(!ts.contains_key("strict"));
    }

    #[test]
    fn inner_declarations_relax_at_six() {
        let catalog = default_catalog();
        let at_5 = resolve(catalog, Language::Js, 5, &BTreeMap::new());
        let at_6 = resolve(catalog, Language::Js, 6, &BTreeMap::new());
        assert_eq!(at_5.get("no-inner-declarations"), Some(&RuleValue::Error));
        assert_eq!(at_6.get("no-inner-declarations"), Some(&RuleValue::Off));
    }

    #[test]
    fn capture_group_rule_needs_nine_in_both_languages() {
        let catalog = default_catalog();
        for language in [Language::Js, Language::Ts] {
            let at_8 = resolve(catalog, language, 8, &BTreeMap::new());
            let at_9 = resolve(catalog, language, 9, &BTreeMap::new());
            assert!(!at_8.contains_key("prefer-named-capture-group"));
            assert_eq!(
                at_9.get("prefer-named-capture-group"),
                Some(&RuleValue::Error)
            );
        }
    }

    #[test]
    fn quotes_default_to_single() {
        let resolved = resolve(default_catalog(), Language::Js, 5, &BTreeMap::new());
        let quotes = resolved.get("quotes").expect("quotes configured");
        assert_eq!(quotes.options().first().and_then(Value::as_str), Some("single"));
    }
}
