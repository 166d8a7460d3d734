//! Aggregation of per-file results into a single verdict and report.

use crate::types::{FileResult, Severity, Verdict};
use std::fmt::Write;

/// Decides overall success and formats the human-readable report.
///
/// `ok` is true iff the total error count over all results is zero;
/// warnings alone never fail the run. The report groups messages by file
/// in result order and is `None` when no file has any messages.
#[must_use]
pub fn aggregate(results: &[FileResult]) -> Verdict {
    let total_errors: usize = results.iter().map(|r| r.error_count).sum();
    let total_warnings: usize = results.iter().map(|r| r.warning_count).sum();

    let report = if total_errors + total_warnings == 0 {
        None
    } else {
        Some(format_report(results, total_errors, total_warnings))
    };

    Verdict {
        ok: total_errors == 0,
        report,
    }
}

fn format_report(results: &[FileResult], total_errors: usize, total_warnings: usize) -> String {
    let mut report = String::new();
    for result in results {
        if result.messages.is_empty() {
            continue;
        }
        let _ = writeln!(report, "{}", result.file_path.display());
        for message in &result.messages {
            let rule = message.rule_id.as_deref().unwrap_or("");
            let _ = writeln!(
                report,
                "  {}:{}  {}  {}  {}",
                message.line, message.column, message.severity, message.message, rule
            );
        }
        report.push('\n');
    }

    let problems = total_errors + total_warnings;
    let _ = writeln!(
        report,
        "\u{2716} {} {} ({} {}, {} {})",
        problems,
        plural(problems, "problem", "problems"),
        total_errors,
        plural(total_errors, "error", "errors"),
        total_warnings,
        plural(total_warnings, "warning", "warnings"),
    );
    report
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Sum of error-severity messages over all results.
#[must_use]
pub fn total_error_count(results: &[FileResult]) -> usize {
    results.iter().map(|r| r.error_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LintMessage;

    fn result_with(path: &str, errors: usize, warnings: usize) -> FileResult {
        let mut result = FileResult::new(path);
        for i in 0..errors {
            result.push(
                LintMessage::new(i + 1, 1, Severity::Error, "broken").with_rule("some-rule"),
            );
        }
        for i in 0..warnings {
            result.push(LintMessage::new(i + 1, 2, Severity::Warning, "iffy"));
        }
        result
    }

    #[test]
    fn no_messages_means_ok_and_no_report() {
        let verdict = aggregate(&[]);
        assert!(verdict.ok);
        assert!(verdict.report.is_none());
    }

    #[test]
    fn warnings_alone_do_not_fail() {
        let verdict = aggregate(&[result_with("a.txt", 0, 1)]);
        assert!(verdict.ok);
        let report = verdict.report.expect("warnings are reported");
        assert!(report.contains("1 problem (0 errors, 1 warning)"));
    }

    #[test]
    fn errors_fail_the_run() {
        let verdict = aggregate(&[result_with("a.js", 1, 0), result_with("b.js", 1, 0)]);
        assert!(!verdict.ok);
        let report = verdict.report.expect("report");
        assert!(report.contains("2 problems (2 errors, 0 warnings)"));
    }

    #[test]
    fn report_groups_by_file_in_order() {
        let verdict = aggregate(&[result_with("b.js", 1, 0), result_with("a.js", 1, 0)]);
        let report = verdict.report.expect("report");
        let b_pos = report.find("b.js").expect("b.js listed");
        let a_pos = report.find("a.js").expect("a.js listed");
        assert!(b_pos < a_pos, "result order is preserved");
    }

    #[test]
    fn message_lines_show_position_and_rule() {
        let verdict = aggregate(&[result_with("a.js", 1, 0)]);
        let report = verdict.report.expect("report");
        assert!(report.contains("1:1  error  broken  some-rule"));
    }
}
