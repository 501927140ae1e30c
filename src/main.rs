//! Deploy helper that mirrors a local build directory to a remote host

use anyhow::Result;
use clap::Parser;
use colored::*;

use shipdir::cli::{Cli, Commands};
use shipdir::config::SettingsStore;
use shipdir::deploy::{
    DeployError, DeployRunner, SystemProcessRunner, clear_command, copy_command, validate,
};
use shipdir::system;
use shipdir::ui::{self, EventLog, InteractiveConfirm};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Deps) => system::check_dependencies(),
        Some(Commands::Settings) => show_settings(),
        Some(Commands::Deploy { dry_run }) => run_deploy(dry_run),
        None => run_deploy(false),
    }
}

/// Prompt for the five fields and run the deployment. A validation rejection
/// re-presents the form with the previous answers as defaults, so the user
/// can fix the one field that was wrong.
fn run_deploy(dry_run: bool) -> Result<()> {
    let store = SettingsStore::default_location()?;
    let mut defaults = store.load();

    if dry_run {
        return run_dry_run(&defaults);
    }

    let process = SystemProcessRunner;
    let mut log = EventLog::new();

    loop {
        let config = ui::prompt_config(&defaults)?;
        let mut runner = DeployRunner::new(&process, &store);

        match runner.deploy(&config, &InteractiveConfirm, &mut log) {
            Ok(()) => {
                println!(
                    "{}",
                    "🎉 Deployment Complete Successfully!".bright_green().bold()
                );
                return Ok(());
            }
            Err(DeployError::Validation(e)) => {
                println!("{}", format!("❌ {}", e).bright_red());
                println!();
                // Keep the user's edits as the new defaults
                defaults = config;
            }
            Err(DeployError::Aborted) => {
                println!("Deployment cancelled - nothing was changed");
                return Ok(());
            }
            Err(e) => {
                println!("{}", format!("❌ {}", e).bright_red().bold());
                return Err(e.into());
            }
        }
    }
}

/// Validate the configuration and show both command lines without running
/// anything or saving the settings.
fn run_dry_run(defaults: &shipdir::config::DeployConfig) -> Result<()> {
    let config = ui::prompt_config(defaults)?;

    match validate(&config) {
        Ok(()) => println!("✅ Configuration is valid"),
        Err(e) => println!("{}", format!("❌ {}", e).bright_red()),
    }

    println!();
    println!("Commands that a real deployment would run, in order:");
    println!("  {}", clear_command(&config));
    println!("  {}", copy_command(&config));

    Ok(())
}

fn show_settings() -> Result<()> {
    let store = SettingsStore::default_location()?;
    println!("📁 Settings file: {}", store.path().display());

    let config = store.load();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
