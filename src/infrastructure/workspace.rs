//! Workspace discovery and initialization

use crate::error::{LeadmapError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract workspace for lead-mapping operations
pub trait Workspace {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .leadmap/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .leadmap/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .leadmap directory exists
    fn is_initialized(&self) -> bool;

    /// Create .leadmap directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of Workspace
#[derive(Debug, Clone)]
pub struct FileSystemWorkspace {
    pub root: PathBuf,
}

impl FileSystemWorkspace {
    /// Create a new workspace with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemWorkspace { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks LEADMAP_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check LEADMAP_ROOT environment variable first
        if let Ok(root_path) = std::env::var("LEADMAP_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_leadmap_dir(&path) {
                return Ok(FileSystemWorkspace::new(path));
            } else {
                return Err(LeadmapError::Config(format!(
                    "LEADMAP_ROOT is set to '{}' but no .leadmap directory found. \
                    Run 'leadmap init' in that directory or unset LEADMAP_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_leadmap_dir(&current) {
                return Ok(FileSystemWorkspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .leadmap
                    return Err(LeadmapError::NotLeadmapDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Absolute path of the backing data file for the given config
    pub fn data_path(&self, config: &Config) -> PathBuf {
        self.root.join(&config.data_file)
    }

    /// Check if a path contains a .leadmap directory
    fn has_leadmap_dir(path: &Path) -> bool {
        path.join(".leadmap").is_dir()
    }
}

impl Workspace for FileSystemWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_leadmap_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let leadmap_dir = self.root.join(".leadmap");

        if leadmap_dir.exists() {
            return Err(LeadmapError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&leadmap_dir)?;
        Ok(())
    }
}
