//! Error types for leadmap

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the leadmap application
#[derive(Debug, Error)]
pub enum LeadmapError {
    #[error("Not a leadmap directory: {0}")]
    NotLeadmapDirectory(PathBuf),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("No lead at position {0}")]
    NoSuchLead(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed data file {path}: {source}")]
    Data {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl LeadmapError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LeadmapError::NotLeadmapDirectory(_) => 2,
            LeadmapError::InvalidField(_) => 3,
            LeadmapError::NoSuchLead(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LeadmapError::NotLeadmapDirectory(path) => {
                format!(
                    "Not a leadmap directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'leadmap init' in this directory to start a new mapping\n\
                    • Navigate to an existing leadmap directory\n\
                    • Set LEADMAP_ROOT environment variable to your mapping path",
                    path.display()
                )
            }
            LeadmapError::InvalidField(msg) => {
                if msg.contains("business type") {
                    format!(
                        "{}\n\n\
                        Valid business types: restaurant, cafe, bar, retail, \
                        services, hotel, supermarket, bakery, other",
                        msg
                    )
                } else if msg.contains("potential") {
                    format!(
                        "{}\n\nValid potential levels: low, medium, high, very-high",
                        msg
                    )
                } else if msg.contains("contact status") {
                    format!(
                        "{}\n\n\
                        Valid statuses: not-contacted, contacted, \
                        meeting-scheduled, proposal-sent, client",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            LeadmapError::NoSuchLead(pos) => {
                format!(
                    "No lead at position {}\n\n\
                    Suggestions:\n\
                    • Run 'leadmap list' to see positions\n\
                    • Positions are 1-based and follow the list order",
                    pos
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LeadmapError
pub type Result<T> = std::result::Result<T, LeadmapError>;
