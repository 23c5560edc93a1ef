use std::{convert::Infallible, env, fs, path::Path, path::PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use tasklet_util::expand_tilde;
use tracing::warn;

/// Operator configuration read from `config.json`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskletConfig {
    /// Stage catalog replacing the embedded one.
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl TaskletConfig {
    /// Loads the configuration from the default path; a missing or
    /// unreadable file yields the defaults.
    pub fn load() -> Result<Self, Infallible> {
        Self::load_from_path(&default_config_path())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Infallible> {
        let Ok(content) = fs::read_to_string(path) else {
            return Ok(TaskletConfig::default());
        };
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring malformed configuration");
                Ok(TaskletConfig::default())
            }
        }
    }

    /// Catalog path with `~` expanded.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(expand_tilde)
    }
}

/// Get the default path for the configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var("TASKLET_CONFIG_PATH")
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tasklet")
        .join("config.json")
}
