//! Config management use case

use crate::error::{LeadmapError, Result};
use crate::infrastructure::{Config, FileSystemWorkspace, Workspace};

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: FileSystemWorkspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: FileSystemWorkspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "data_file" => Ok(config.data_file.clone()),
            "min_priority" => Ok(config.min_priority.to_string()),
            "contact_limit" => Ok(config.contact_limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(LeadmapError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: data_file, \
                min_priority, contact_limit, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "data_file" => {
                if value.trim().is_empty() {
                    return Err(LeadmapError::Config(
                        "data_file must not be empty".to_string(),
                    ));
                }
                config.data_file = value.to_string();
            }
            "min_priority" => {
                let parsed: u8 = value.parse().map_err(|_| {
                    LeadmapError::Config(format!("min_priority must be a number 0-5, got '{}'", value))
                })?;
                if parsed > 5 {
                    return Err(LeadmapError::Config(format!(
                        "min_priority must be a number 0-5, got '{}'",
                        value
                    )));
                }
                config.min_priority = parsed;
            }
            "contact_limit" => {
                config.contact_limit = value.parse().map_err(|_| {
                    LeadmapError::Config(format!("contact_limit must be a number, got '{}'", value))
                })?;
            }
            "created" => {
                return Err(LeadmapError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(LeadmapError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: data_file, \
                    min_priority, contact_limit",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
