use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "zearch";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the user's config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON file holding the organizations array
    #[serde(default = "default_organizations_file")]
    pub organizations_file: PathBuf,

    /// JSON file holding the users array
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf,

    /// JSON file holding the tickets array
    #[serde(default = "default_tickets_file")]
    pub tickets_file: PathBuf,

    /// Colour output when writing to a terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_organizations_file() -> PathBuf {
    PathBuf::from("data/organizations.json")
}

fn default_users_file() -> PathBuf {
    PathBuf::from("data/users.json")
}

fn default_tickets_file() -> PathBuf {
    PathBuf::from("data/tickets.json")
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            organizations_file: default_organizations_file(),
            users_file: default_users_file(),
            tickets_file: default_tickets_file(),
            color: default_color(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`, or return default if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Get the path to the config file, `None` if the platform has no config directory
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(CONFIG_FILE))
}
