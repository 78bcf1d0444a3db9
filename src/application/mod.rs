//! Application layer - Use cases and orchestration

pub mod add_lead;
pub mod contacts;
pub mod export;
pub mod init;
pub mod manage_config;
pub mod report;
pub mod search;

pub use add_lead::add_lead;
pub use contacts::{mark_contacted, upcoming_contacts};
pub use export::export_leads;
pub use manage_config::ConfigService;
pub use report::generate_report;
pub use search::SearchOptions;
