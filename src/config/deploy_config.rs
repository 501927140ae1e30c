//! The deployment configuration record

use serde::{Deserialize, Serialize};

/// The five fields a deployment needs, kept as plain strings.
///
/// The serde renames pin the JSON keys used in the settings file; every field
/// defaults to empty so keys omitted from a hand-edited file simply leave the
/// form blank instead of failing to load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Local directory whose contents are pushed to the remote host
    #[serde(rename = "SourcePath", default)]
    pub source_path: String,
    #[serde(rename = "RemoteHost", default)]
    pub remote_host: String,
    #[serde(rename = "RemoteUser", default)]
    pub remote_user: String,
    /// Private key file passed to ssh/scp via -i
    #[serde(rename = "KeyPath", default)]
    pub key_path: String,
    /// Remote directory that gets cleared and repopulated
    #[serde(rename = "RemoteDest", default)]
    pub remote_dest: String,
}

impl DeployConfig {
    /// The `user@host` login target for ssh and scp
    pub fn remote_target(&self) -> String {
        format!("{}@{}", self.remote_user, self.remote_host)
    }
}
