//! Rule catalog data model.
//!
//! The catalog is an ordered, immutable list of [`RuleEntry`] values built
//! once at startup and passed by reference into the resolver. Entries are
//! merged in declaration order, so later entries override earlier ones on
//! key collision.

use crate::types::Severity;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Target language of a rule-set resolution.
///
/// There are exactly two valid targets; an unknown language is not
/// representable, which enforces the resolver's contract at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// The untyped scripting language.
    Js,
    /// Its statically-typed superset.
    Ts,
}

impl Language {
    /// Returns the short tag used in logs and CLI flags.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration value of a single rule.
///
/// `Inherit` is a dedicated variant rather than a sentinel object so that
/// resolution handles it exhaustively; it never survives into an effective
/// rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValue {
    /// Take the configuration of the bare (unprefixed) rule of the same
    /// name, then turn the bare rule off. Only valid in prefixed entries.
    Inherit,
    /// Rule disabled.
    Off,
    /// Report at warning severity.
    Warn,
    /// Report at error severity.
    Error,
    /// Warning severity with rule options.
    WarnWith(Vec<Value>),
    /// Error severity with rule options.
    ErrorWith(Vec<Value>),
}

impl RuleValue {
    /// Severity at which this value reports, or `None` when inactive.
    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Inherit | Self::Off => None,
            Self::Warn | Self::WarnWith(_) => Some(Severity::Warning),
            Self::Error | Self::ErrorWith(_) => Some(Severity::Error),
        }
    }

    /// Rule options, if any were configured.
    #[must_use]
    pub fn options(&self) -> &[Value] {
        match self {
            Self::WarnWith(opts) | Self::ErrorWith(opts) => opts,
            _ => &[],
        }
    }

    /// True when this value reports at any severity.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.severity().is_some()
    }
}

// Wire format matches the conventional shape: a severity keyword, or a
// sequence of severity keyword followed by options. `Inherit` is internal
// to the catalog and has no external representation.
impl Serialize for RuleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Inherit => Err(serde::ser::Error::custom(
                "inherit sentinel must be resolved before serialization",
            )),
            Self::Off => serializer.serialize_str("off"),
            Self::Warn => serializer.serialize_str("warn"),
            Self::Error => serializer.serialize_str("error"),
            Self::WarnWith(opts) | Self::ErrorWith(opts) => {
                let keyword = if matches!(self, Self::WarnWith(_)) {
                    "warn"
                } else {
                    "error"
                };
                let mut seq = serializer.serialize_seq(Some(opts.len() + 1))?;
                seq.serialize_element(keyword)?;
                for opt in opts {
                    seq.serialize_element(opt)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for RuleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleValueVisitor;

        fn from_keyword<E: de::Error>(keyword: &str) -> Result<RuleValue, E> {
            match keyword {
                "off" => Ok(RuleValue::Off),
                "warn" => Ok(RuleValue::Warn),
                "error" => Ok(RuleValue::Error),
                other => Err(E::custom(format!(
                    "unknown severity keyword `{other}`, expected off, warn or error"
                ))),
            }
        }

        impl<'de> Visitor<'de> for RuleValueVisitor {
            type Value = RuleValue;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a severity keyword or a [severity, options...] sequence")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RuleValue, E> {
                from_keyword(v)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleValue, A::Error> {
                let keyword: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("empty rule value sequence"))?;
                let base = from_keyword::<A::Error>(&keyword)?;
                let mut opts = Vec::new();
                while let Some(opt) = seq.next_element::<Value>()? {
                    opts.push(opt);
                }
                Ok(match (base, opts.is_empty()) {
                    (value, true) => value,
                    (RuleValue::Warn, false) => RuleValue::WarnWith(opts),
                    (RuleValue::Error, false) => RuleValue::ErrorWith(opts),
                    (RuleValue::Off, false) => RuleValue::Off,
                    _ => unreachable!("from_keyword never yields inherit or *With"),
                })
            }
        }

        deserializer.deserialize_any(RuleValueVisitor)
    }
}

/// Minimum-version thresholds per target language.
///
/// `None` means the entry never applies to that target. Thresholds are in
/// the ordinal versioning scheme (see the resolver for normalization).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applicability {
    /// Minimum ordinal version for the untyped target.
    pub js_min: Option<u32>,
    /// Minimum ordinal version for the typed target.
    pub ts_min: Option<u32>,
}

impl Applicability {
    /// Applies to the untyped target from `js_min` on, and to the typed
    /// target unconditionally. This is the common case: typed sources are
    /// always compiled against a modern baseline.
    #[must_use]
    pub fn both(js_min: u32) -> Self {
        Self {
            js_min: Some(js_min),
            ts_min: Some(5),
        }
    }

    /// Applies to both targets from the same minimum version.
    #[must_use]
    pub fn any_lang(min: u32) -> Self {
        Self {
            js_min: Some(min),
            ts_min: Some(min),
        }
    }

    /// Applies to the untyped target only.
    #[must_use]
    pub fn only_js(js_min: u32) -> Self {
        Self {
            js_min: Some(js_min),
            ts_min: None,
        }
    }

    /// Applies to the typed target only.
    #[must_use]
    pub fn only_ts(ts_min: u32) -> Self {
        Self {
            js_min: None,
            ts_min: Some(ts_min),
        }
    }

    /// True when the entry applies to `language` at the given normalized
    /// version.
    #[must_use]
    pub fn satisfied_by(&self, language: Language, version: u32) -> bool {
        let min = match language {
            Language::Js => self.js_min,
            Language::Ts => self.ts_min,
        };
        min.is_some_and(|min| version >= min)
    }
}

/// One static entry in the rule catalog.
#[derive(Debug, Clone)]
pub struct RuleEntry {
    /// Descriptive grouping label, informational only.
    pub category: &'static str,
    /// Applicability thresholds for this entry.
    pub applies: Applicability,
    /// Rule-name to configuration-value pairs, in declaration order.
    /// Names are fully qualified: plugin entries carry their prefix.
    pub rules: Vec<(String, RuleValue)>,
}

impl RuleEntry {
    /// Creates an entry of unprefixed rules.
    #[must_use]
    pub fn new(
        category: &'static str,
        applies: Applicability,
        rules: Vec<(&str, RuleValue)>,
    ) -> Self {
        Self {
            category,
            applies,
            rules: rules
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect(),
        }
    }

    /// Creates an entry whose rule names are all prefixed with
    /// `plugin` and a `/` separator.
    #[must_use]
    pub fn plugin(
        plugin: &str,
        category: &'static str,
        applies: Applicability,
        rules: Vec<(&str, RuleValue)>,
    ) -> Self {
        Self {
            category,
            applies,
            rules: rules
                .into_iter()
                .map(|(name, value)| (format!("{plugin}/{name}"), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn applicability_both_covers_typed_baseline() {
        let applies = Applicability::both(6);
        assert!(!applies.satisfied_by(Language::Js, 5));
        assert!(applies.satisfied_by(Language::Js, 6));
        assert!(applies.satisfied_by(Language::Ts, 5));
    }

    #[test]
    fn applicability_only_js_never_matches_typed() {
        let applies = Applicability::only_js(5);
        assert!(applies.satisfied_by(Language::Js, 9));
        assert!(!applies.satisfied_by(Language::Ts, 9));
    }

    #[test]
    fn plugin_entry_prefixes_rule_names() {
        let entry = RuleEntry::plugin(
            "typescript",
            "Typed rules",
            Applicability::only_ts(5),
            vec![("no-misused-new", RuleValue::Error)],
        );
        assert_eq!(entry.rules[0].0, "typescript/no-misused-new");
    }

    #[test]
    fn rule_value_severity() {
        assert_eq!(RuleValue::Off.severity(), None);
        assert_eq!(RuleValue::Inherit.severity(), None);
        assert_eq!(RuleValue::Warn.severity(), Some(Severity::Warning));
        assert_eq!(
            RuleValue::ErrorWith(vec![json!("single")]).severity(),
            Some(Severity::Error)
        );
    }

    #[test]
    fn rule_value_roundtrips_through_json() {
        let value = RuleValue::ErrorWith(vec![json!("single")]);
        let encoded = serde_json::to_string(&value).expect("serialize");
        assert_eq!(encoded, r#"["error","single"]"#);
        let decoded: RuleValue = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, value);
    }

    #[test]
    fn rule_value_deserializes_bare_keyword() {
        let decoded: RuleValue = serde_json::from_str(r#""off""#).expect("deserialize");
        assert_eq!(decoded, RuleValue::Off);
    }

    #[test]
    fn inherit_does_not_serialize() {
        assert!(serde_json::to_string(&RuleValue::Inherit).is_err());
    }
}
