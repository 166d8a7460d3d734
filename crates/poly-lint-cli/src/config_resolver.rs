//! Configuration file resolution.
//!
//! Resolves the configuration file path using a deterministic priority
//! order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{cwd}/poly-lint.toml` or `.poly-lint.toml`
//! 3. No config found → command-line patterns only

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the working directory.
    Project(PathBuf),
    /// No config found.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) => Some(p),
            Self::Default => None,
        }
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["poly-lint.toml", ".poly-lint.toml"];

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order. An explicit path is
/// trusted as-is; a missing file surfaces when loading it.
#[must_use]
pub fn resolve(project_dir: impl AsRef<Path>, explicit: Option<PathBuf>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p);
    }

    for name in PROJECT_CONFIG_NAMES {
        let candidate = project_dir.as_ref().join(name);
        if candidate.exists() {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    ConfigSource::Default
}
