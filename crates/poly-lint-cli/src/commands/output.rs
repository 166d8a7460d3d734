//! Shared output formatting for lint results.

use anyhow::Result;
use poly_lint_core::{FileResult, Verdict};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(results: &[FileResult], verdict: &Verdict, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if let Some(report) = &verdict.report {
                println!("{report}");
            }
        }
        OutputFormat::Json => {
            let reported: Vec<&FileResult> = results.iter().filter(|r| !r.is_empty()).collect();
            let json = serde_json::to_string_pretty(&reported)?;
            println!("{json}");
        }
    }
    Ok(())
}
