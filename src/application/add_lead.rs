//! Add lead use case

use crate::domain::Establishment;
use crate::error::Result;
use crate::infrastructure::LeadStore;

/// Validate a record, append it, and persist the whole collection. This is
/// the add-then-save convention: `LeadStore::add` alone never touches disk.
pub fn add_lead(store: &mut LeadStore, record: Establishment) -> Result<()> {
    record.validate()?;
    store.add(record);
    store.save()?;
    Ok(())
}
