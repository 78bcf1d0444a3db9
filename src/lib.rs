//! leadmap - Business-lead mapping for city district scouting
//!
//! A command-line tool that catalogs commercial establishments scouted in a
//! city district and supports searching, filtering, reporting, and CSV export
//! over a flat JSON-backed collection.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LeadmapError;
