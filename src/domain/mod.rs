//! Domain layer - Lead records and aggregation

pub mod categories;
pub mod establishment;
pub mod report;

pub use categories::{BusinessType, ContactStatus, DigitalPresence, Potential};
pub use establishment::Establishment;
pub use report::ReportSummary;
