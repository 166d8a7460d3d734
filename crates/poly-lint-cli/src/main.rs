//! poly-lint CLI tool.
//!
//! Usage:
//! ```bash
//! poly-lint check [OPTIONS] [PATTERNS]...
//! poly-lint rules [OPTIONS]
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use poly_lint_core::{Language, SourceType};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Multi-language lint runner with a curated, version-gated rule catalog
#[derive(Parser)]
#[command(name = "poly-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint files and report problems
    Check {
        /// File patterns to lint (glob syntax); when given, the
        /// configuration file's groups are ignored
        patterns: Vec<String>,

        /// Write fixed content back to the files
        #[arg(long)]
        fix: bool,

        /// Language version, ordinal or year form
        #[arg(long)]
        ecma_version: Option<u32>,

        /// How source files are interpreted
        #[arg(long)]
        source_type: Option<SourceTypeArg>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the effective rule set for a language and version
    Rules {
        /// Target language
        #[arg(short, long, default_value = "js")]
        language: LanguageArg,

        /// Language version, ordinal or year form
        #[arg(long)]
        ecma_version: Option<u32>,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable grouped report.
    #[default]
    Text,
    /// JSON output, one object per file.
    Json,
}

/// Target language flag.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LanguageArg {
    /// The untyped scripting language.
    Js,
    /// Its statically-typed superset.
    Ts,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Js => Self::Js,
            LanguageArg::Ts => Self::Ts,
        }
    }
}

/// Source interpretation flag.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SourceTypeArg {
    /// Top-level code in script mode.
    Script,
    /// Module syntax.
    Module,
}

impl From<SourceTypeArg> for SourceType {
    fn from(arg: SourceTypeArg) -> Self {
        match arg {
            SourceTypeArg::Script => Self::Script,
            SourceTypeArg::Module => Self::Module,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            patterns,
            fix,
            ecma_version,
            source_type,
            format,
        } => {
            let source = config_resolver::resolve(std::env::current_dir()?, cli.config);
            commands::check::run(
                &commands::check::CheckOptions {
                    patterns,
                    fix,
                    ecma_version,
                    source_type: source_type.map(Into::into),
                    format,
                },
                &source,
            )
        }
        Commands::Rules {
            language,
            ecma_version,
        } => commands::rules::run(language.into(), ecma_version),
    }
}
