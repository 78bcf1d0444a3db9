//! JSON-backed lead store
//!
//! The store owns the authoritative in-memory collection. The backing file is
//! a UTF-8 JSON array of records, read fully on open and rewritten fully on
//! every save. Single process, single user; no locking, no atomic rename.

use crate::domain::{ContactStatus, Establishment, Potential};
use crate::error::{LeadmapError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct LeadStore {
    path: PathBuf,
    records: Vec<Establishment>,
}

impl LeadStore {
    /// Open the store at the given path. A missing file is a first-run
    /// condition and yields an empty collection; a malformed file is fatal.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let records = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|source| {
                LeadmapError::Data {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(LeadmapError::Io(e)),
        };

        Ok(LeadStore { path, records })
    }

    /// Rewrite the entire collection to the backing file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut contents = serde_json::to_string_pretty(&self.records)?;
        contents.push('\n');
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Append a record in memory. Callers persist with `save`.
    pub fn add(&mut self, record: Establishment) {
        self.records.push(record);
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Establishment] {
        &self.records
    }

    /// Mutable access for direct field assignment (e.g. flipping contact
    /// status) followed by an explicit `save`.
    pub fn records_mut(&mut self) -> &mut [Establishment] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring search on the name field
    pub fn search_by_name(&self, query: &str) -> Vec<&Establishment> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Case-insensitive substring search on the neighborhood field
    pub fn search_by_neighborhood(&self, query: &str) -> Vec<&Establishment> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|e| e.neighborhood.to_lowercase().contains(&query))
            .collect()
    }

    /// Case-insensitive substring search on the business-type label
    pub fn search_by_business_type(&self, query: &str) -> Vec<&Establishment> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|e| e.business_type.label().to_lowercase().contains(&query))
            .collect()
    }

    /// All records whose website flag is false
    pub fn without_website(&self) -> Vec<&Establishment> {
        self.records.iter().filter(|e| !e.has_website).collect()
    }

    /// Exact match on the potential-client level
    pub fn by_potential(&self, potential: Potential) -> Vec<&Establishment> {
        self.records
            .iter()
            .filter(|e| e.potential == Some(potential))
            .collect()
    }

    /// Records with priority >= min, sorted descending by priority. The sort
    /// is stable, so ties keep their original order.
    pub fn by_min_priority(&self, min: u8) -> Vec<&Establishment> {
        let mut matches: Vec<&Establishment> = self
            .records
            .iter()
            .filter(|e| e.priority >= min)
            .collect();
        matches.sort_by(|a, b| b.priority.cmp(&a.priority));
        matches
    }

    /// Not-contacted records, highest priority first, at most `limit`
    pub fn upcoming_contacts(&self, limit: usize) -> Vec<&Establishment> {
        let mut pending: Vec<&Establishment> = self
            .records
            .iter()
            .filter(|e| e.contact_status == ContactStatus::NotContacted)
            .collect();
        pending.sort_by(|a, b| b.priority.cmp(&a.priority));
        pending.truncate(limit);
        pending
    }
}
