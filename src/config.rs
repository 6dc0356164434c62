use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::DraftDefaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON file with the articles to start from. Edits are kept in memory
    /// only and never written back.
    pub seed_path: Option<PathBuf>,

    #[serde(default = "default_cyrillic_output")]
    pub cyrillic_output: bool,

    #[serde(default)]
    pub defaults: DraftDefaults,
}

fn default_cyrillic_output() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_path: None,
            cyrillic_output: default_cyrillic_output(),
            defaults: DraftDefaults::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Reads the config at `path`, writing the defaults there first if the
    /// file does not exist yet. A relative `seed_path` is taken relative to
    /// the directory holding the config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            if let (Some(seed), Some(dir)) = (&config.seed_path, path.parent()) {
                if seed.is_relative() {
                    config.seed_path = Some(dir.join(seed));
                }
            }
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zaplanje-press")
            .join("config.toml")
    }
}
