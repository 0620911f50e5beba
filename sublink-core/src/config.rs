use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ClientError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_seconds: 10,
            user_agent: concat!("sublink-cli/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// `<config dir>/sublink/config.json`
    pub fn config_file_path() -> Result<PathBuf, ClientError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ClientError::Config("no configuration directory available".into()))?;
        Ok(config_dir.join("sublink").join("config.json"))
    }

    /// Loads the default config file, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load() -> Self {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                warn!(error = %e, "using default client configuration");
                Self::default()
            }
        }
    }

    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    error = %e,
                    path = %path.display(),
                    "failed to load configuration, using defaults"
                );
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ClientError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ClientError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::Config(format!("{}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))
    }
}
