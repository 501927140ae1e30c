//! System dependency checking utilities

use anyhow::Result;
use colored::*;
use std::process::Command;

use crate::deploy::{SCP_PROGRAM, SSH_PROGRAM};

/// Check that the external clients the tool shells out to are resolvable.
pub fn check_dependencies() -> Result<()> {
    let mut all_good = true;

    for cmd in [SSH_PROGRAM, SCP_PROGRAM] {
        if command_exists(cmd) {
            println!("✅ Command: {}", cmd);
        } else {
            println!("❌ Command: {} (missing)", cmd);
            all_good = false;
        }
    }

    println!();
    if all_good {
        println!(
            "{}",
            "🎉 All required commands are available!"
                .bright_green()
                .bold()
        );
    } else {
        println!(
            "{}",
            "⚠️  Install an OpenSSH client (ssh/scp) before deploying."
                .bright_yellow()
                .bold()
        );
    }

    Ok(())
}

fn command_exists(cmd: &str) -> bool {
    let (finder, arg) = if cfg!(windows) {
        ("where", cmd)
    } else {
        ("which", cmd)
    };
    Command::new(finder)
        .arg(arg)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
