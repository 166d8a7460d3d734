//! File-type routing and per-group adapter memoization.

use crate::adapters::{ScenarioLinter, ScriptLinter};
use crate::catalog::{Language, RuleEntry};
use crate::config::InputGroup;
use crate::linter::{LinterRef, UnsupportedLinter};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Routing outcome for one file, derived from its extension.
///
/// The table is fixed: this is not a plugin host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `.js`, `.cjs`, `.mjs` — the untyped scripting language.
    Untyped,
    /// `.ts` — the typed superset.
    Typed,
    /// `.feature` — the structured scenario format.
    Scenario,
    /// Anything else.
    Unsupported,
}

/// Maps a file path to its routing outcome.
#[must_use]
pub fn file_kind(path: &Path) -> FileKind {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("js" | "cjs" | "mjs") => FileKind::Untyped,
        Some("ts") => FileKind::Typed,
        Some("feature") => FileKind::Scenario,
        _ => FileKind::Unsupported,
    }
}

/// Lazily instantiates and caches one adapter per [`FileKind`].
///
/// Scoped to one pipeline invocation and one input group: the group's
/// configuration is fixed for the registry's lifetime, so the kind alone
/// determines the adapter's configuration. The registry is discarded when
/// the invocation completes; nothing is shared across top-level calls.
pub struct LinterRegistry<'a> {
    group: &'a InputGroup,
    catalog: &'a [RuleEntry],
    cache: Mutex<HashMap<FileKind, LinterRef>>,
}

impl<'a> LinterRegistry<'a> {
    /// Creates an empty registry for one input group.
    #[must_use]
    pub fn new(group: &'a InputGroup, catalog: &'a [RuleEntry]) -> Self {
        Self {
            group,
            catalog,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the adapter responsible for `path`, constructing it on
    /// first use for its kind.
    #[must_use]
    pub fn get(&self, path: &Path) -> LinterRef {
        let kind = file_kind(path);
        let mut cache = match self.cache.lock() {
            Ok(cache) => cache,
            Err(poisoned) => {
                // Adapter construction does not panic; recover the map.
                warn!("linter cache lock poisoned, recovering");
                poisoned.into_inner()
            }
        };
        Arc::clone(cache.entry(kind).or_insert_with(|| self.build(kind)))
    }

    fn build(&self, kind: FileKind) -> LinterRef {
        match kind {
            FileKind::Untyped => Arc::new(ScriptLinter::new(self.group, self.catalog, Language::Js)),
            FileKind::Typed => Arc::new(ScriptLinter::new(self.group, self.catalog, Language::Ts)),
            FileKind::Scenario => Arc::new(ScenarioLinter::new(self.group)),
            FileKind::Unsupported => Arc::new(UnsupportedLinter),
        }
    }
}
