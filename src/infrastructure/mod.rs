//! Infrastructure layer - Persistence and workspace I/O

pub mod config;
pub mod export;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use export::export_csv;
pub use store::LeadStore;
pub use workspace::{FileSystemWorkspace, Workspace};
