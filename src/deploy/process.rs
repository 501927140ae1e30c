//! Process invocation boundary

use anyhow::{Context, Result};
use std::process::Command;

use super::ExternalCommand;

/// Exit status and captured stderr of a finished external process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs an external command and waits for it to finish.
///
/// Tests substitute scripted implementations so no real ssh/scp binaries are
/// needed to exercise the deployment runner.
pub trait ProcessRunner {
    fn run(&self, command: &ExternalCommand) -> Result<ProcessOutput>;
}

/// Spawns the real binary and blocks until it exits.
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &ExternalCommand) -> Result<ProcessOutput> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .output()
            .with_context(|| format!("Failed to start {}", command.program))?;

        Ok(ProcessOutput {
            // Killed by signal on unix reports no code; treat it as a failure
            exit_code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_reports_a_spawn_error() {
        let runner = SystemProcessRunner;
        let command = ExternalCommand {
            program: "shipdir-no-such-binary".to_string(),
            args: vec![],
        };
        let err = runner.run(&command).unwrap_err();
        assert!(err.to_string().contains("shipdir-no-such-binary"));
    }
}
