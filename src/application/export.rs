//! CSV export use case

use crate::error::Result;
use crate::infrastructure::{export_csv, LeadStore};
use std::path::Path;

/// Export the collection to CSV. Returns false (and writes nothing) when the
/// store is empty; the CLI surfaces that as a warning, not an error.
pub fn export_leads(store: &LeadStore, output: &Path) -> Result<bool> {
    export_csv(store, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BusinessType, Establishment};
    use tempfile::TempDir;

    #[test]
    fn test_export_leads_writes_file() {
        let temp = TempDir::new().unwrap();
        let mut store = LeadStore::open(temp.path().join("leads.json")).unwrap();
        store.add(
            Establishment::new("Café A", "Rua X, 1", "Chiado", BusinessType::Cafe).unwrap(),
        );

        let out = temp.path().join("leads.csv");
        assert!(export_leads(&store, &out).unwrap());
        assert!(out.exists());
    }

    #[test]
    fn test_export_leads_empty_store_is_noop() {
        let temp = TempDir::new().unwrap();
        let store = LeadStore::open(temp.path().join("leads.json")).unwrap();

        let out = temp.path().join("leads.csv");
        assert!(!export_leads(&store, &out).unwrap());
        assert!(!out.exists());
    }
}
