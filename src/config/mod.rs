//! Configuration module for deployment settings

mod deploy_config;
mod settings;

pub use deploy_config::DeployConfig;
pub use settings::{SETTINGS_FILE_NAME, SettingsStore};
