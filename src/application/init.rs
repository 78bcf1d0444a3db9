//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemWorkspace, Workspace};
use std::fs;
use std::path::Path;

/// Initialize a new lead-mapping workspace at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = FileSystemWorkspace::new(path.to_path_buf());

    // Initialize .leadmap directory
    workspace.initialize()?;

    // Create and save default config
    let config = Config::new();
    workspace.save_config(&config)?;

    println!("Initialized leadmap workspace at {}", path.display());
    println!("Data file: {}", config.data_file);

    Ok(())
}
