//! Workspace configuration management

use crate::error::{LeadmapError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_data_file() -> String {
    "leads.json".to_string()
}

fn default_min_priority() -> u8 {
    3
}

fn default_contact_limit() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backing JSON file, relative to the workspace root
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Default threshold for the minimum-priority filter
    #[serde(default = "default_min_priority")]
    pub min_priority: u8,
    /// Default number of upcoming contacts to list
    #[serde(default = "default_contact_limit")]
    pub contact_limit: usize,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            data_file: default_data_file(),
            min_priority: default_min_priority(),
            contact_limit: default_contact_limit(),
            created: Utc::now(),
        }
    }

    /// Load config from .leadmap/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".leadmap").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LeadmapError::NotLeadmapDirectory(path.to_path_buf())
            } else {
                LeadmapError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| LeadmapError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .leadmap/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let leadmap_dir = path.join(".leadmap");
        let config_path = leadmap_dir.join("config.toml");

        if !leadmap_dir.exists() {
            fs::create_dir(&leadmap_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| LeadmapError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
