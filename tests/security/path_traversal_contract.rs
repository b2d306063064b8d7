use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn project_name_cannot_escape_the_base_directory() {
    let ctx = TestContext::new();

    for name in ["../../escaped", "/tmp/escaped", "nested/escaped", ".."] {
        ctx.cli()
            .args(["new", "express-app", "--skip-commands"])
            .args(["-a", &format!("name={name}"), "-a", "dbType=None", "-a", "location=Current directory"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid answer for 'name'"));
    }

    assert_eq!(fs::read_dir(ctx.work_dir()).unwrap().count(), 0);
    assert!(!ctx.home().join("escaped").exists());
}

#[test]
fn plan_rejects_traversing_name_before_listing_actions() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["plan", "express-app-basic"])
        .args(["-a", "name=../outside", "-a", "dbType=MySQL"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("actions").not())
        .stderr(predicate::str::contains("Invalid answer for 'name'"));
}
