//! Pre-flight validation of a deployment configuration

use std::path::Path;
use thiserror::Error;

use crate::config::DeployConfig;

/// Rejections detected before anything touches the remote host.
///
/// Each variant carries its own user-facing message so the form can tell the
/// user exactly which field to fix.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Source directory does not exist: {0}")]
    SourceMissing(String),
    #[error("Remote host must not be empty")]
    HostEmpty,
    #[error("Remote user must not be empty")]
    UserEmpty,
    #[error("Remote destination path must not be empty")]
    DestEmpty,
    #[error("Private key file does not exist: {0}")]
    KeyMissing(String),
}

/// Check every field of the configuration. Pure apart from the two local
/// filesystem existence checks; the remote host is never contacted.
pub fn validate(config: &DeployConfig) -> Result<(), ValidationError> {
    if config.source_path.trim().is_empty() || !Path::new(&config.source_path).is_dir() {
        return Err(ValidationError::SourceMissing(config.source_path.clone()));
    }
    if config.remote_host.trim().is_empty() {
        return Err(ValidationError::HostEmpty);
    }
    if config.remote_user.trim().is_empty() {
        return Err(ValidationError::UserEmpty);
    }
    if config.remote_dest.trim().is_empty() {
        return Err(ValidationError::DestEmpty);
    }
    if config.key_path.trim().is_empty() || !Path::new(&config.key_path).is_file() {
        return Err(ValidationError::KeyMissing(config.key_path.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid_config(dir: &TempDir) -> DeployConfig {
        let key = dir.path().join("id_rsa");
        std::fs::write(&key, "fake key").unwrap();
        DeployConfig {
            source_path: dir.path().to_string_lossy().into_owned(),
            remote_host: "10.0.0.5".to_string(),
            remote_user: "deploy".to_string(),
            key_path: key.to_string_lossy().into_owned(),
            remote_dest: "/var/www/html".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_configuration() {
        let dir = TempDir::new().unwrap();
        assert_eq!(validate(&valid_config(&dir)), Ok(()));
    }

    #[test]
    fn rejects_missing_source_directory() {
        let dir = TempDir::new().unwrap();
        let mut config = valid_config(&dir);
        config.source_path = dir
            .path()
            .join("no-such-dir")
            .to_string_lossy()
            .into_owned();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::SourceMissing(_))
        ));
    }

    #[test]
    fn rejects_whitespace_only_remote_fields() {
        let dir = TempDir::new().unwrap();

        let mut config = valid_config(&dir);
        config.remote_host = "   ".to_string();
        assert_eq!(validate(&config), Err(ValidationError::HostEmpty));

        let mut config = valid_config(&dir);
        config.remote_user = "".to_string();
        assert_eq!(validate(&config), Err(ValidationError::UserEmpty));

        let mut config = valid_config(&dir);
        config.remote_dest = " ".to_string();
        assert_eq!(validate(&config), Err(ValidationError::DestEmpty));
    }

    #[test]
    fn rejects_missing_key_file() {
        let dir = TempDir::new().unwrap();
        let mut config = valid_config(&dir);
        config.key_path = dir.path().join("no-key").to_string_lossy().into_owned();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::KeyMissing(_))
        ));
    }

    #[test]
    fn empty_field_messages_are_distinct_from_missing_key() {
        let dir = TempDir::new().unwrap();
        let mut config = valid_config(&dir);
        config.remote_host = String::new();
        let host_msg = validate(&config).unwrap_err().to_string();

        let mut config = valid_config(&dir);
        config.key_path = String::new();
        let key_msg = validate(&config).unwrap_err().to_string();

        assert_ne!(host_msg, key_msg);
    }
}
