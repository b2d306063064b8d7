#![cfg(unix)]

use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

const POSTGRES: [&str; 6] =
    ["-a", "name=myApi", "-a", "dbType=PostgreSQL", "-a", "location=Current directory"];

#[test]
fn generates_postgres_project() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "express-app"])
        .args(POSTGRES)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ add"))
        .stdout(predicate::str::contains("12 applied, 0 skipped"));

    let project = ctx.project("MyApi");
    for file in [
        "src/routes/index.js",
        "src/controllers/indexController.js",
        "src/middleware/auth.js",
        "src/config/config-postgres.js",
        "src/app.js",
        "src/.env",
        ".gitignore",
    ] {
        assert!(project.join(file).exists(), "{file} missing");
    }

    let package = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(package.contains("\"start\": \"node src/app.js\","));
    assert!(package.contains("\"dev\": \"nodemon src/app.js\","));
    assert!(fs::read_to_string(project.join("src/app.js")).unwrap().contains("config-postgres"));

    assert_eq!(
        ctx.npm_calls(&project),
        vec![
            "init -y",
            "install pg pg-hstore sequelize",
            "install express dotenv colors cors helmet morgan bcryptjs jsonwebtoken",
            "install --save-dev nodemon",
        ]
    );
}

#[test]
fn generates_into_custom_directory() {
    let ctx = TestContext::new();
    let target = ctx.home().join("projects");
    fs::create_dir_all(&target).unwrap();
    let custom_path = format!("customPath={}", target.display());

    ctx.cli()
        .args(["new", "express-app", "-a", "name=shop api", "-a", "dbType=MongoDB"])
        .args(["-a", "location=Custom", "-a", &custom_path])
        .assert()
        .success();

    assert!(target.join("ShopApi/src/config/config-mongo.js").exists());
    assert!(!ctx.project("ShopApi").exists());
}

#[test]
fn custom_path_must_exist() {
    let ctx = TestContext::new();
    let missing = format!("customPath={}", ctx.home().join("nowhere").display());

    ctx.cli()
        .args(["new", "express-app", "-a", "name=shop", "-a", "dbType=None"])
        .args(["-a", "location=Custom", "-a", &missing])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid answer for 'customPath'"));
}

#[test]
fn existing_file_is_a_conflict_and_left_untouched() {
    let ctx = TestContext::new();
    let routes = ctx.project("MyApi").join("src/routes/index.js");
    fs::create_dir_all(routes.parent().unwrap()).unwrap();
    fs::write(&routes, "// mine\n").unwrap();

    ctx.cli()
        .args(["new", "express-app"])
        .args(POSTGRES)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("❌ Action 1 failed: add"))
        .stderr(predicate::str::contains("File already exists"));

    assert_eq!(fs::read_to_string(&routes).unwrap(), "// mine\n");
}

#[test]
fn force_overwrites_existing_files() {
    let ctx = TestContext::new();
    let routes = ctx.project("MyApi").join("src/routes/index.js");
    fs::create_dir_all(routes.parent().unwrap()).unwrap();
    fs::write(&routes, "// mine\n").unwrap();

    ctx.cli().args(["new", "express-app", "--force"]).args(POSTGRES).assert().success();

    assert_ne!(fs::read_to_string(&routes).unwrap(), "// mine\n");
}

#[test]
fn failing_command_halts_and_keeps_earlier_changes() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "express-app"])
        .args(POSTGRES)
        .env("FAKE_NPM_FAIL", "init")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✅ add"))
        .stderr(predicate::str::contains("❌ Action 5 failed: run `npm init -y`"))
        .stderr(predicate::str::contains("exit code 1"))
        .stderr(predicate::str::contains("npm ERR! simulated failure of init"))
        .stderr(predicate::str::contains("left in place"));

    let project = ctx.project("MyApi");
    assert!(project.join("src/routes/index.js").exists());
    assert!(!project.join("src/config/config-postgres.js").exists());
    assert_eq!(ctx.npm_calls(&project), vec!["init -y"]);
}

#[test]
fn skipped_commands_leave_package_json_to_fail() {
    let ctx = TestContext::new();
    ctx.write_config("[execution]\nskip_commands = true\n");

    ctx.cli()
        .args(["new", "express-app"])
        .args(POSTGRES)
        .assert()
        .failure()
        .stdout(predicate::str::contains("⏭️  run `npm init -y`"))
        .stderr(predicate::str::contains("❌ Action 10 failed: modify"))
        .stderr(predicate::str::contains("WARN").not());

    let project = ctx.project("MyApi");
    assert!(project.join("src/config/config-postgres.js").exists());
    assert!(ctx.npm_calls(&project).is_empty());
}

#[test]
fn template_directory_overrides_builtin_template() {
    let ctx = TestContext::new();
    let templates = ctx.home().join("templates/express");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("routes.j2"), "// routes for {{ name | pascal_case }}\n").unwrap();
    let templates_dir = ctx.home().join("templates");

    ctx.cli()
        .args(["new", "express-app-basic", "--templates"])
        .arg(&templates_dir)
        .args(["-a", "name=shop", "-a", "dbType=MySQL"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(ctx.project("Shop").join("src/routes/index.js")).unwrap(),
        "// routes for Shop\n"
    );
    assert!(ctx.project("Shop").join("src/config/config-mysql.js").exists());
}
