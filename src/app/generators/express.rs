//! Express/Node.js backend generators.

use std::path::{Path, PathBuf};

use crate::domain::prompt::{existing_directory, project_name};
use crate::domain::{
    Action, ActionList, Answers, AppError, BaseLocation, DbEngine, GeneratorSpec, PlanContext,
    PromptSpec,
};

pub const EXPRESS_APP: &str = "express-app";
pub const EXPRESS_APP_BASIC: &str = "express-app-basic";

const GITIGNORE: &str = "node_modules/\n.env\n";
const SCRIPTS_PATTERN: &str = "\"scripts\": {";
const SCRIPTS_INSERTION: &str =
    "\n    \"start\": \"node src/app.js\",\n    \"dev\": \"nodemon src/app.js\",";
const NPM_INIT: &str = "npm init -y";
const NPM_INSTALL_DEPS: &str =
    "npm install express dotenv colors cors helmet morgan bcryptjs jsonwebtoken";
const NPM_INSTALL_DEV_DEPS: &str = "npm install --save-dev nodemon";

fn custom_location_selected(answers: &Answers) -> bool {
    answers.get("location").and_then(BaseLocation::from_choice) == Some(BaseLocation::Custom)
}

/// Express backend with a database engine and a choice of base directory.
pub fn express_app() -> GeneratorSpec {
    GeneratorSpec::new(
        EXPRESS_APP,
        "Express backend with an optional database engine",
        vec![
            PromptSpec::input("name", "Project name").validate(project_name),
            PromptSpec::select("dbType", "Database engine", DbEngine::choices()),
            PromptSpec::select("location", "Where should the project be created?", BaseLocation::choices()),
            PromptSpec::input("customPath", "Directory to create the project in")
                .when(custom_location_selected)
                .validate(existing_directory),
        ],
        build_express_app,
    )
}

/// Express backend created in the current directory.
pub fn express_app_basic() -> GeneratorSpec {
    let engines = [DbEngine::Mongo, DbEngine::MySql, DbEngine::Postgres]
        .iter()
        .map(|engine| engine.choice_label().to_string())
        .collect();

    GeneratorSpec::new(
        EXPRESS_APP_BASIC,
        "Express backend in the current directory",
        vec![
            PromptSpec::input("name", "Project name").validate(project_name),
            PromptSpec::select("dbType", "Database engine", engines),
        ],
        build_express_app_basic,
    )
}

fn build_express_app(answers: &Answers, ctx: &PlanContext) -> Result<ActionList, AppError> {
    let name = answers.get("name").unwrap_or_default();
    let location = answers
        .get("location")
        .and_then(BaseLocation::from_choice)
        .unwrap_or(BaseLocation::Current);
    let root = ctx.locations.project_root(name, location, answers.get("customPath"))?;
    let engine = DbEngine::from_choice(answers.get("dbType").unwrap_or_default());

    let mut actions = base_files(&root);
    actions.push(Action::add_inline(root.join(".gitignore"), GITIGNORE));
    actions.push(Action::run(NPM_INIT, &root));

    if let Some(slug) = engine.slug() {
        actions.push(engine_config(&root, slug));
        actions.push(Action::add(root.join("src/app.js"), format!("express/{slug}/app")));
        actions.push(Action::add(root.join("src/.env"), format!("express/{slug}/env")));
        actions.push(engine_install(&root, engine));
    } else {
        tracing::debug!(engine = %engine, "no engine-specific actions");
    }

    actions.extend(dependency_tail(&root));
    Ok(ActionList::new(actions))
}

fn build_express_app_basic(answers: &Answers, ctx: &PlanContext) -> Result<ActionList, AppError> {
    let name = answers.get("name").unwrap_or_default();
    let root = ctx.locations.project_root(name, BaseLocation::Current, None)?;
    let engine = DbEngine::from_choice(answers.get("dbType").unwrap_or_default());

    let mut actions = base_files(&root);
    actions.push(Action::add(root.join("src/app.js"), "express/app"));
    actions.push(Action::add(root.join("src/.env"), "express/env"));
    actions.push(Action::add_inline(root.join(".gitignore"), GITIGNORE));
    actions.push(Action::run(NPM_INIT, &root));
    actions.extend(dependency_tail(&root));

    if let Some(slug) = engine.slug() {
        actions.push(engine_config(&root, slug));
        actions.push(engine_install(&root, engine));
    }

    Ok(ActionList::new(actions))
}

fn base_files(root: &Path) -> Vec<Action> {
    vec![
        Action::add(root.join("src/routes/index.js"), "express/routes"),
        Action::add(root.join("src/controllers/indexController.js"), "express/controller"),
        Action::add(root.join("src/middleware/auth.js"), "express/middleware"),
    ]
}

fn engine_config(root: &Path, slug: &str) -> Action {
    let path: PathBuf = root.join(format!("src/config/config-{slug}.js"));
    Action::add(path, format!("express/{slug}/config"))
}

fn engine_install(root: &Path, engine: DbEngine) -> Action {
    Action::run(format!("npm install {}", engine.packages().join(" ")), root)
}

/// `package.json` scripts, then runtime and development dependencies.
fn dependency_tail(root: &Path) -> Vec<Action> {
    vec![
        Action::modify_after(root.join("package.json"), SCRIPTS_PATTERN, SCRIPTS_INSERTION),
        Action::run(NPM_INSTALL_DEPS, root),
        Action::run(NPM_INSTALL_DEV_DEPS, root),
    ]
}
