use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Local CLI context. Replaces the hard-coded base URL and ids the one-off
/// scripts used to carry.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub server_url: Option<String>,
    pub user_id: Option<Uuid>,
    pub account_id: Option<Uuid>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Config::get_path()?;
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Config::get_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// --server flag wins over the stored URL, then the localhost default.
    pub fn resolve_server(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.server_url.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    fn get_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "botctl", "cli")
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
