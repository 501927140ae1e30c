//! Interactive prompts for the deployment form

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use crate::config::DeployConfig;
use crate::deploy::ConfirmAction;

/// Prompt for the five deployment fields, pre-filled with the saved values.
///
/// Nothing is validated here; bad paths and empty fields are caught at deploy
/// time so the user can type freely, exactly like editing a form.
pub fn prompt_config(saved: &DeployConfig) -> Result<DeployConfig> {
    let theme = ColorfulTheme::default();

    println!("{}", style("📦 Deployment Configuration").bold());
    println!("═══════════════════════════");
    println!("Press Enter to keep the saved value, Ctrl+C to exit");
    println!();

    let source_path = prompt_field(&theme, "Local source directory", &saved.source_path)?;
    let remote_host = prompt_field(&theme, "Remote host", &saved.remote_host)?;
    let remote_user = prompt_field(&theme, "Remote user", &saved.remote_user)?;
    let key_path = prompt_field(&theme, "Private key file", &saved.key_path)?;
    let remote_dest = prompt_field(&theme, "Remote destination directory", &saved.remote_dest)?;
    println!();

    Ok(DeployConfig {
        source_path,
        remote_host,
        remote_user,
        key_path,
        remote_dest,
    })
}

fn prompt_field(theme: &ColorfulTheme, prompt: &str, saved: &str) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if !saved.is_empty() {
        input = input.default(saved.to_string());
    }
    Ok(input.interact_text()?)
}

/// Destructive-action confirmation backed by a terminal prompt.
#[derive(Default)]
pub struct InteractiveConfirm;

impl ConfirmAction for InteractiveConfirm {
    fn confirm_destructive(&self, config: &DeployConfig) -> Result<bool> {
        println!(
            "⚠️  This will {} everything under {} on {}",
            style("DELETE").red().bold(),
            config.remote_dest,
            config.remote_host
        );
        let accepted = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Continue with deployment?")
            .default(false)
            .interact()?;
        Ok(accepted)
    }
}
