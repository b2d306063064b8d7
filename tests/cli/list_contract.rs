use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_shows_builtin_generators() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("express-app "))
        .stdout(predicate::str::contains("express-app-basic"));
}

#[test]
fn list_alias_matches_list() {
    let ctx = TestContext::new();

    ctx.cli().arg("ls").assert().success().stdout(predicate::str::contains("express-app"));
}

#[test]
fn malformed_config_fails_before_anything_runs() {
    let ctx = TestContext::new();
    ctx.write_config("[execution]\nforce = true\n");

    ctx.cli()
        .args(["plan", "express-app-basic", "-a", "name=shop", "-a", "dbType=MySQL"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TOML parse error"));
}
