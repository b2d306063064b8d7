use crate::harness::TestContext;
use predicates::prelude::*;

const POSTGRES: [&str; 6] =
    ["-a", "name=myApi", "-a", "dbType=PostgreSQL", "-a", "location=Current directory"];

#[test]
fn plan_prints_numbered_actions_without_touching_disk() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["plan", "express-app"])
        .args(POSTGRES)
        .assert()
        .success()
        .stdout(predicate::str::contains("express-app (12 actions)"))
        .stdout(predicate::str::contains("config-postgres.js"))
        .stdout(predicate::str::contains("npm install pg pg-hstore sequelize"));

    assert!(!ctx.project("MyApi").exists());
}

#[test]
fn plan_json_lists_every_action() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["plan", "express-app", "--json"]).args(POSTGRES).output().unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let actions = plan["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 12);
    assert_eq!(actions[9]["type"], "modify_file");
    assert_eq!(plan["answers"]["dbType"], "PostgreSQL");
}

#[test]
fn plan_rejects_engine_outside_the_choices() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["plan", "express-app", "--json"])
        .args(["-a", "name=shop", "-a", "dbType=Oracle", "-a", "location=Desktop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid answer for 'dbType'"));
}

#[test]
fn dry_run_changes_nothing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "express-app", "--dry-run"])
        .args(POSTGRES)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!ctx.project("MyApi").exists());
}

#[test]
fn unknown_generator_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["plan", "rails-app"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Generator 'rails-app' not found"))
        .stderr(predicate::str::contains("express-app, express-app-basic"));
}

#[test]
fn malformed_answer_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["plan", "express-app", "-a", "name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected key=value"));
}

#[test]
fn plan_in_current_directory_works_without_home() {
    let ctx = TestContext::new();

    ctx.cli()
        .env_remove("HOME")
        .args(["plan", "express-app"])
        .args(POSTGRES)
        .assert()
        .success()
        .stdout(predicate::str::contains("express-app (12 actions)"));
}
