//! JSON-backed settings store for remembering the last-used configuration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::DeployConfig;

/// Settings file name, created next to the executable
pub const SETTINGS_FILE_NAME: &str = "shipdir.json";

/// Loads and saves the deployment configuration as a small JSON file.
///
/// Loading is deliberately tolerant: a missing or broken settings file must
/// never prevent the tool from starting, it only means the form starts blank.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store the settings next to the executable, where users expect to find
    /// the file when editing it by hand.
    pub fn default_location() -> Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate the current executable")?;
        let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::at(dir.join(SETTINGS_FILE_NAME)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored configuration, falling back to defaults on any error.
    pub fn load(&self) -> DeployConfig {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // First run, nothing saved yet
                return DeployConfig::default();
            }
            Err(e) => {
                eprintln!(
                    "⚠️  Could not read settings file {}: {}",
                    self.path.display(),
                    e
                );
                return DeployConfig::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "⚠️  Ignoring malformed settings file {}: {}",
                    self.path.display(),
                    e
                );
                DeployConfig::default()
            }
        }
    }

    /// Overwrite the settings file with all five fields.
    pub fn save(&self, config: &DeployConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write settings file: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::at(dir.path().join(SETTINGS_FILE_NAME))
    }

    fn sample_config() -> DeployConfig {
        DeployConfig {
            source_path: "C:\\Dist".to_string(),
            remote_host: "10.0.0.5".to_string(),
            remote_user: "deploy".to_string(),
            key_path: "C:\\keys\\id_rsa".to_string(),
            remote_dest: "/var/www/html".to_string(),
        }
    }

    #[test]
    fn round_trip_reproduces_all_five_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let config = sample_config();

        store.save(&config).unwrap();
        assert_eq!(store.load(), config);
    }

    #[test]
    fn save_writes_all_five_keys() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample_config()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        for key in [
            "SourcePath",
            "RemoteHost",
            "RemoteUser",
            "KeyPath",
            "RemoteDest",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load(), DeployConfig::default());
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(), DeployConfig::default());
    }

    #[test]
    fn omitted_keys_keep_their_default_value() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{"RemoteHost":"10.0.0.5"}"#).unwrap();

        let config = store.load();
        assert_eq!(config.remote_host, "10.0.0.5");
        assert_eq!(config.source_path, "");
        assert_eq!(config.remote_user, "");
        assert_eq!(config.key_path, "");
        assert_eq!(config.remote_dest, "");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            r#"{"RemoteHost":"10.0.0.5","Theme":"dark","WindowWidth":800}"#,
        )
        .unwrap();

        assert_eq!(store.load().remote_host, "10.0.0.5");
    }
}
