//! The deployment runner: validate, confirm, persist, clear, copy

use thiserror::Error;

use super::{ProcessRunner, ValidationError, clear_command, copy_command, validate};
use crate::config::{DeployConfig, SettingsStore};
use crate::ui::EventLog;

/// Where a deployment attempt currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployState {
    Idle,
    Validating,
    Confirming,
    Clearing,
    Copying,
    Done,
    Failed,
}

/// Everything that can end a deployment attempt early.
///
/// The remote variants carry the captured stderr of the failing process;
/// they are the only failures that can occur after the destructive clear
/// step may already have run.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Deployment cancelled")]
    Aborted,
    #[error("Remote clear failed: {0}")]
    RemoteClear(String),
    #[error("Remote copy failed: {0}")]
    RemoteCopy(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Asks the user to approve the destructive clear step.
///
/// The interactive implementation lives in the ui module; tests script the
/// answer.
pub trait ConfirmAction {
    fn confirm_destructive(&self, config: &DeployConfig) -> anyhow::Result<bool>;
}

/// Drives one deployment attempt through the state machine
/// `Idle → Validating → Confirming → Clearing → Copying → Done|Failed`.
///
/// `busy` is the presentation layer's re-entrance guard: set once the user
/// has confirmed, cleared again on every exit path.
pub struct DeployRunner<'a> {
    process: &'a dyn ProcessRunner,
    settings: &'a SettingsStore,
    state: DeployState,
    busy: bool,
}

impl<'a> DeployRunner<'a> {
    pub fn new(process: &'a dyn ProcessRunner, settings: &'a SettingsStore) -> Self {
        Self {
            process,
            settings,
            state: DeployState::Idle,
            busy: false,
        }
    }

    pub fn state(&self) -> DeployState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Run one deployment attempt to completion.
    ///
    /// Validation rejections and a declined confirmation leave the runner
    /// back in `Idle` with no side effects; remote failures end in `Failed`
    /// with the failure logged. The busy flag is cleared whichever way the
    /// attempt ends.
    pub fn deploy(
        &mut self,
        config: &DeployConfig,
        confirm: &dyn ConfirmAction,
        log: &mut EventLog,
    ) -> Result<(), DeployError> {
        let result = self.run_stages(config, confirm, log);
        self.busy = false;
        self.state = match &result {
            Ok(()) => DeployState::Done,
            Err(DeployError::Validation(_)) | Err(DeployError::Aborted) => DeployState::Idle,
            Err(e) => {
                log.append(&format!("Deployment failed: {}", e));
                DeployState::Failed
            }
        };
        result
    }

    fn run_stages(
        &mut self,
        config: &DeployConfig,
        confirm: &dyn ConfirmAction,
        log: &mut EventLog,
    ) -> Result<(), DeployError> {
        self.state = DeployState::Validating;
        validate(config)?;

        self.state = DeployState::Confirming;
        if !confirm.confirm_destructive(config)? {
            log.append("Deployment cancelled by user");
            return Err(DeployError::Aborted);
        }

        // From here on a second attempt must not start until this one ends.
        self.busy = true;

        self.settings.save(config)?;
        log.append(&format!(
            "Settings saved to {}",
            self.settings.path().display()
        ));

        self.state = DeployState::Clearing;
        log.append(&format!("Clearing remote directory: {}", config.remote_dest));
        let output = self.process.run(&clear_command(config))?;
        if !output.success() {
            return Err(DeployError::RemoteClear(output.stderr));
        }

        self.state = DeployState::Copying;
        log.append(&format!("Copying files from {}...", config.source_path));
        let output = self.process.run(&copy_command(config))?;
        if !output.success() {
            return Err(DeployError::RemoteCopy(output.stderr));
        }

        log.append("Deployment Complete Successfully!");
        Ok(())
    }
}
