//! Pure builders for the external ssh/scp command lines

use std::fmt;

use crate::config::DeployConfig;

pub const SSH_PROGRAM: &str = "ssh";
pub const SCP_PROGRAM: &str = "scp";

/// A fully assembled external command, ready to spawn or display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// `ssh -i <key> -o StrictHostKeyChecking=no <user>@<host> "rm -rf <dest>/*"`
///
/// Host key checking stays disabled: the tool targets trusted internal hosts
/// and the one-shot flow cannot service an interactive host-key prompt.
pub fn clear_command(config: &DeployConfig) -> ExternalCommand {
    ExternalCommand {
        program: SSH_PROGRAM.to_string(),
        args: vec![
            "-i".to_string(),
            config.key_path.clone(),
            "-o".to_string(),
            "StrictHostKeyChecking=no".to_string(),
            config.remote_target(),
            format!("rm -rf {}/*", config.remote_dest),
        ],
    }
}

/// `scp -r -i <key> -o StrictHostKeyChecking=no <source>/* <user>@<host>:<dest>`
pub fn copy_command(config: &DeployConfig) -> ExternalCommand {
    ExternalCommand {
        program: SCP_PROGRAM.to_string(),
        args: vec![
            "-r".to_string(),
            "-i".to_string(),
            config.key_path.clone(),
            "-o".to_string(),
            "StrictHostKeyChecking=no".to_string(),
            format!("{}/*", config.source_path),
            format!("{}:{}", config.remote_target(), config.remote_dest),
        ],
    }
}
