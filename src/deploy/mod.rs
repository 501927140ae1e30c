//! Deployment orchestration: validation, command building and the runner

mod command;
mod process;
mod runner;
mod validation;

pub use command::{ExternalCommand, SCP_PROGRAM, SSH_PROGRAM, clear_command, copy_command};
pub use process::{ProcessOutput, ProcessRunner, SystemProcessRunner};
pub use runner::{ConfirmAction, DeployError, DeployRunner, DeployState};
pub use validation::{ValidationError, validate};
