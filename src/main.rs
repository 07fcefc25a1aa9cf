//! epistle - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use epistle::config::Config;
use epistle::error::CommitError;
use epistle::flow::{WizardOutcome, executor, run_wizard};
use epistle::git;
use epistle::prompt::TerminalPrompt;
use epistle::wizard::MAX_LINE_WIDTH;

/// Build a conventional commit message interactively.
#[derive(Parser, Debug)]
#[command(name = "epistle")]
#[command(about = "Build a conventional commit message interactively")]
#[command(version)]
struct Cli {
    /// Path to the config file (default: .epistlerc in the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final message instead of committing
    #[arg(long)]
    dry_run: bool,

    /// Stage all changes before committing (git add -A)
    #[arg(short, long)]
    all: bool,

    /// After committing, offer to run a release command and push
    #[arg(long)]
    release_flow: bool,

    /// Release command to offer in the release flow (run through sh -c)
    #[arg(long, requires = "release_flow")]
    release_command: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("epistle=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Step 1: Load configuration (missing file is fine)
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if config.types.is_empty() {
        anyhow::bail!(
            "No commit types configured. Create a .epistlerc with a \"types\" array or pass --config."
        );
    }

    // Step 2: Make sure there is something to commit before asking questions
    let repo = if cli.dry_run {
        None
    } else {
        let repo = git::open_repository()?;
        if !git::has_changes(&repo)? {
            return Err(CommitError::NoChanges.into());
        }
        Some(repo)
    };

    println!(
        "\nLine 1 will be cropped at {MAX_LINE_WIDTH} characters. All other lines will be wrapped after {MAX_LINE_WIDTH} characters.\n"
    );

    // Step 3: Run the wizard
    let engine = TerminalPrompt::new();
    let stage_all = cli.all;

    let outcome = run_wizard(&config, &engine, |message| {
        match &repo {
            Some(repo) => {
                let oid = git::commit(repo, message, stage_all)?;
                println!("Created commit {}", &oid.to_string()[..7]);
            }
            None => {
                println!("\n--- Dry Run Output ---\n{message}");
            }
        }
        Ok(())
    })
    .context("Wizard failed")?;

    // Step 4: Optional release/push follow-ups
    if cli.release_flow && !cli.dry_run && matches!(outcome, WizardOutcome::Committed(_)) {
        let release = dialoguer::Confirm::new()
            .with_prompt("Run the release command?")
            .default(false)
            .interact()
            .unwrap_or(false);

        if release {
            executor::run_release_command(cli.release_command.as_deref())
                .context("Release command failed")?;
        }

        let push = dialoguer::Confirm::new()
            .with_prompt("Push changes (git push --follow-tags)?")
            .default(false)
            .interact()
            .unwrap_or(false);

        if push {
            executor::push_with_tags().context("Push failed")?;
        }
    }

    Ok(())
}
