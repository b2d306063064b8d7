//! CLI Adapter.

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Select};

use crate::app::api::{self, PlanOutcome, RunSettings};
use crate::app::logging;
use crate::domain::{ActionOutcome, ActionStatus, Answers, AppError};
use crate::services::{DialoguerPrompter, PresetPrompter};

#[derive(Parser)]
#[command(name = "plinth")]
#[command(version)]
#[command(about = "Scaffold new projects from built-in generators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a generator, prompting for anything not preset
    #[clap(visible_alias = "n")]
    New {
        /// Generator name (selected interactively when omitted)
        generator: Option<String>,
        #[command(flatten)]
        input: InputArgs,
        /// Overwrite files that already exist
        #[arg(short, long)]
        force: bool,
        /// Record external commands as skipped instead of running them
        #[arg(long)]
        skip_commands: bool,
        /// Print the plan without changing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// List available generators
    #[clap(visible_alias = "ls")]
    List,
    /// Print the actions a generator would perform
    #[clap(visible_alias = "p")]
    Plan {
        /// Generator name
        generator: String,
        #[command(flatten)]
        input: InputArgs,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Default)]
struct InputArgs {
    /// Preset answer (repeatable)
    #[arg(short, long = "answer", value_name = "KEY=VALUE")]
    answers: Vec<String>,
    /// Directory of templates overriding the built-in ones
    #[arg(long, value_name = "DIR")]
    templates: Option<PathBuf>,
    /// Config file (default: ~/.config/plinth/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl InputArgs {
    fn prompter(&self) -> Result<PresetPrompter<DialoguerPrompter>, AppError> {
        let presets = Answers::from_pairs(&self.answers)?;
        Ok(PresetPrompter::new(presets, DialoguerPrompter::new()))
    }

    fn settings(&self, force: bool, skip_commands: bool) -> RunSettings {
        RunSettings {
            config_path: self.config.clone(),
            templates_dir: self.templates.clone(),
            overwrite: force,
            skip_commands,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::New {
        generator: None,
        input: InputArgs::default(),
        force: false,
        skip_commands: false,
        dry_run: false,
    });

    let result = match command {
        Commands::New { generator, input, force, skip_commands, dry_run } => {
            run_new(generator, &input, force, skip_commands, dry_run)
        }
        Commands::List => run_list(),
        Commands::Plan { generator, input, json } => run_plan(&generator, &input, json),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

fn report_error(error: &AppError) {
    match error {
        AppError::ActionFailed { index, description, source } => {
            eprintln!("❌ Action {} failed: {}", index, description);
            eprintln!("   {}", source);
            eprintln!("   Changes made by earlier actions were left in place.");
        }
        other => eprintln!("Error: {}", other),
    }
}

fn run_list() -> Result<(), AppError> {
    for summary in api::list_generators()? {
        println!("{:<20} {}", summary.name, summary.description);
    }
    Ok(())
}

fn run_plan(generator: &str, input: &InputArgs, json: bool) -> Result<(), AppError> {
    let mut prompter = input.prompter()?;
    let outcome = api::plan(generator, &mut prompter, &input.settings(false, false))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_plan(&outcome);
    }
    Ok(())
}

fn run_new(
    generator: Option<String>,
    input: &InputArgs,
    force: bool,
    skip_commands: bool,
    dry_run: bool,
) -> Result<(), AppError> {
    let generator = match generator {
        Some(name) => name,
        None => select_generator()?,
    };
    let mut prompter = input.prompter()?;
    let settings = input.settings(force, skip_commands);

    if dry_run {
        let outcome = api::plan(&generator, &mut prompter, &settings)?;
        print_plan(&outcome);
        println!("ℹ️  Dry run: nothing was changed");
        return Ok(());
    }

    let outcome = api::generate(&generator, &mut prompter, &settings, print_outcome)?;
    println!(
        "✅ {} finished: {} applied, {} skipped",
        generator,
        outcome.report.applied(),
        outcome.report.skipped()
    );
    Ok(())
}

fn print_outcome(outcome: &ActionOutcome) {
    match outcome.status {
        ActionStatus::Applied => println!("✅ {}", outcome.description),
        ActionStatus::Skipped => println!("⏭️  {} (skipped)", outcome.description),
    }
}

fn print_plan(outcome: &PlanOutcome) {
    println!("📋 {} ({} actions)", outcome.generator, outcome.actions.len());
    for (position, action) in outcome.actions.iter().enumerate() {
        println!("  {:>2}. {}", position + 1, action.describe());
    }
}

fn select_generator() -> Result<String, AppError> {
    let summaries = api::list_generators()?;
    let items: Vec<String> =
        summaries.iter().map(|s| format!("{} - {}", s.name, s.description)).collect();

    let selection = Select::new()
        .with_prompt("Select generator")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| match e {
            DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => AppError::Cancelled,
            e => AppError::PromptFailed { prompt: "generator".into(), details: e.to_string() },
        })?;

    let index = selection.ok_or(AppError::Cancelled)?;
    Ok(summaries[index].name.clone())
}
