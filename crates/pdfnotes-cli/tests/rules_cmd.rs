//! Integration tests for the `rules` subcommands.

mod common;

use common::cmd;
use predicates::prelude::*;

#[test]
fn rules_list_shows_presets() {
    cmd()
        .args(["rules", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("academic"))
        .stdout(predicate::str::contains("[default]"))
        .stdout(predicate::str::contains("cjk"));
}

#[test]
fn rules_explain_prints_patterns() {
    cmd()
        .args(["rules", "explain", "numbered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("decimal-section"));
}

#[test]
fn rules_explain_unknown_preset_fails() {
    cmd()
        .args(["rules", "explain", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset 'klingon'"));
}

#[test]
fn rules_schema_prints_example() {
    cmd()
        .args(["rules", "schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_line_length"));
}

#[test]
fn rules_validate_accepts_good_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("rules.json");
    std::fs::write(
        &file,
        r#"{ "name": "Mine", "version": "2", "rules": [ { "name": "x", "pattern": "X \\d" } ] }"#,
    )
    .unwrap();

    cmd()
        .args(["rules", "validate"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule set 'Mine' (v2) is valid."))
        .stdout(predicate::str::contains("not anchored"));
}

#[test]
fn rules_validate_rejects_bad_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("rules.json");
    std::fs::write(
        &file,
        r#"{ "name": "Mine", "version": "2", "rules": [ { "name": "x", "pattern": "([" } ] }"#,
    )
    .unwrap();

    cmd()
        .args(["rules", "validate"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));
}

#[test]
fn rules_match_classifies_lines() {
    cmd()
        .args(["rules", "match", "14.1 Sampling Distributions"])
        .assert()
        .success()
        .stdout("heading (rule 'decimal-section')\n");

    cmd()
        .args(["rules", "match", "--preset", "cjk", "第十四章 抽样分布"])
        .assert()
        .success()
        .stdout("heading (rule 'zhang')\n");

    cmd()
        .args(["rules", "match", "An ordinary sentence."])
        .assert()
        .success()
        .stdout("body text\n");
}
