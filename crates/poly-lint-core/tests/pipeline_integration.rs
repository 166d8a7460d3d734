//! End-to-end pipeline tests against real files on disk.

use poly_lint_core::{
    lint, Applicability, InputGroup, LintError, Pipeline, RuleEntry, RuleValue,
};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn catalog() -> Vec<RuleEntry> {
    vec![RuleEntry::new(
        "Stylistic Issues",
        Applicability::both(5),
        vec![
            ("eol-last", RuleValue::Error),
            ("quotes", RuleValue::ErrorWith(vec![json!("single")])),
            ("no-tabs", RuleValue::Error),
        ],
    )]
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().into_owned()
}

#[test]
fn clean_file_passes() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(dir.path(), "clean.js", "'use strict';\n");
    let catalog = catalog();
    let verdict = Pipeline::new(&catalog)
        .run(&[InputGroup::new([path])])
        .expect("run");
    assert!(verdict.ok);
    assert!(verdict.report.is_none());
}

#[test]
fn missing_newline_is_one_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(dir.path(), "one.js", "'use strict';");
    let catalog = catalog();
    let results = Pipeline::new(&catalog)
        .execute(&[InputGroup::new([path])])
        .expect("execute");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].error_count, 1);
}

#[test]
fn wrong_quotes_add_a_second_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(dir.path(), "two.js", "\"use strict\";");
    let catalog = catalog();
    let results = Pipeline::new(&catalog)
        .execute(&[InputGroup::new([path])])
        .expect("execute");
    assert_eq!(results[0].error_count, 2);
}

#[test]
fn errors_sum_across_groups() {
    let dir = TempDir::new().expect("tempdir");
    let first = write(dir.path(), "g1.js", "'use strict';");
    let second = write(dir.path(), "g2.js", "'use strict';");
    let catalog = catalog();
    let error = lint(
        &catalog,
        &[InputGroup::new([first]), InputGroup::new([second])],
    )
    .expect_err("two errors across groups");
    assert_eq!(error.to_string(), "Failed with 2 errors");
    assert!(matches!(error, LintError::Failed { errors: 2 }));
}

#[test]
fn fix_writes_back_and_run_succeeds() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(dir.path(), "fixme.js", "'use strict';");
    let catalog = catalog();
    let verdict = Pipeline::new(&catalog)
        .run(&[InputGroup::new([path.clone()]).fix(true)])
        .expect("run");
    assert!(verdict.ok);
    let persisted = fs::read_to_string(&path).expect("read back");
    assert_eq!(persisted, "'use strict';\n");
}

#[test]
fn unsupported_extension_warns_without_failing() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(dir.path(), "notes.txt", "");
    let catalog = catalog();
    let results = Pipeline::new(&catalog)
        .execute(&[InputGroup::new([path])])
        .expect("execute");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].error_count, 0);
    assert_eq!(results[0].warning_count, 1);
    let verdict = poly_lint_core::report::aggregate(&results);
    assert!(verdict.ok, "warnings alone never fail the run");
}

#[test]
fn glob_pattern_expands_per_group() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "a.js", "'a';\n");
    write(dir.path(), "b.js", "'b';\n");
    let pattern = dir.path().join("*.js").to_string_lossy().into_owned();
    let catalog = catalog();
    let verdict = Pipeline::new(&catalog)
        .run(&[InputGroup::new([pattern])])
        .expect("run");
    assert!(verdict.ok);
}

#[test]
fn scenario_and_script_route_in_one_group() {
    let dir = TempDir::new().expect("tempdir");
    let script = write(dir.path(), "ok.js", "'use strict';\n");
    let feature = write(dir.path(), "bad.feature", "!\n");
    let catalog = catalog();
    let results = Pipeline::new(&catalog)
        .execute(&[InputGroup::new([script, feature])])
        .expect("execute");
    // Only the scenario file produced a result.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].error_count, 1);
}

#[test]
fn one_unreadable_file_does_not_abort_the_batch() {
    let dir = TempDir::new().expect("tempdir");
    // A directory with a lintable extension: matched by the glob, but
    // reading it as a file fails.
    fs::create_dir(dir.path().join("trap.js")).expect("mkdir");
    write(dir.path(), "good.js", "'use strict';");
    let pattern = dir.path().join("*.js").to_string_lossy().into_owned();
    let catalog = catalog();
    let results = Pipeline::new(&catalog)
        .execute(&[InputGroup::new([pattern])])
        .expect("execute");
    assert_eq!(results.len(), 2, "both files produced results");
    let good = results
        .iter()
        .find(|r| r.file_path.ends_with("good.js"))
        .expect("good.js reported");
    assert_eq!(good.error_count, 1);
    let trap = results
        .iter()
        .find(|r| r.file_path.ends_with("trap.js"))
        .expect("trap.js reported");
    assert_eq!(trap.error_count, 1);
    assert!(trap.messages[0].message.contains("Unable to read file"));
}

#[test]
fn overrides_apply_through_the_pipeline() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(dir.path(), "loose.js", "'use strict';");
    let catalog = catalog();
    let group = InputGroup::new([path]).rule("eol-last", RuleValue::Off);
    let verdict = Pipeline::new(&catalog).run(&[group]).expect("run");
    assert!(verdict.ok);
}
