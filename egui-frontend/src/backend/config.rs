//! # App Configuration
//!
//! Settings are read from a YAML file, `gofinances.yaml` in the platform
//! config directory unless `GOFINANCES_CONFIG` points elsewhere.
//!
//! ```yaml
//! data_directory: "/home/me/.local/share/gofinances"
//! log_level: "debug"
//! user:
//!   id: "local-user"
//!   name: "Local User"
//!   email: "local@gofinances.app"
//! ```
//!
//! Every field is optional; a missing file yields the defaults.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::User;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "gofinances.yaml";
pub const CONFIG_PATH_ENV: &str = "GOFINANCES_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding `storage.json`
    pub data_directory: PathBuf,
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_level: String,
    /// The signed-in user
    pub user: User,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            log_level: "info".to_string(),
            user: User {
                id: "local-user".to_string(),
                name: "Local User".to_string(),
                email: "local@gofinances.app".to_string(),
            },
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("app", "gofinances", "GoFinances")
}

fn default_data_directory() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("data"))
}

impl AppConfig {
    /// Where the config file is looked up
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }
        project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load from `path`, falling back to defaults if the file does not exist
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}
