//! Outreach pipeline use cases

use crate::domain::{ContactStatus, Establishment};
use crate::error::{LeadmapError, Result};
use crate::infrastructure::LeadStore;

/// The next leads to contact: not yet contacted, highest priority first,
/// at most `limit`.
pub fn upcoming_contacts(store: &LeadStore, limit: usize) -> Vec<&Establishment> {
    store.upcoming_contacts(limit)
}

/// Mark the lead at the given 1-based list position as contacted and persist.
/// Positions follow the order shown by `leadmap list`.
pub fn mark_contacted(store: &mut LeadStore, position: usize) -> Result<String> {
    let index = position
        .checked_sub(1)
        .ok_or(LeadmapError::NoSuchLead(position))?;

    let record = store
        .records_mut()
        .get_mut(index)
        .ok_or(LeadmapError::NoSuchLead(position))?;

    record.contact_status = ContactStatus::Contacted;
    let name = record.name.clone();

    store.save()?;
    Ok(name)
}
