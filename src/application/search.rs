//! Search and filter use case
//!
//! Combines the individual store queries into one pass so filters can be
//! stacked (name and neighborhood and no-website, etc.), the way the
//! dashboard's filter panel stacked them.

use crate::domain::{Establishment, Potential};
use crate::infrastructure::LeadStore;

/// Filters to apply; unset fields match everything
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub name: Option<String>,
    pub neighborhood: Option<String>,
    pub business_type: Option<String>,
    pub without_website: bool,
    pub potential: Option<Potential>,
    pub min_priority: Option<u8>,
}

impl SearchOptions {
    /// True when no filter is set (a plain listing)
    pub fn is_unfiltered(&self) -> bool {
        self.name.is_none()
            && self.neighborhood.is_none()
            && self.business_type.is_none()
            && !self.without_website
            && self.potential.is_none()
            && self.min_priority.is_none()
    }

    fn matches(&self, record: &Establishment) -> bool {
        if let Some(query) = &self.name {
            if !record.name.to_lowercase().contains(&query.to_lowercase()) {
                return false;
            }
        }
        if let Some(query) = &self.neighborhood {
            if !record
                .neighborhood
                .to_lowercase()
                .contains(&query.to_lowercase())
            {
                return false;
            }
        }
        if let Some(query) = &self.business_type {
            if !record
                .business_type
                .label()
                .to_lowercase()
                .contains(&query.to_lowercase())
            {
                return false;
            }
        }
        if self.without_website && record.has_website {
            return false;
        }
        if let Some(potential) = self.potential {
            if record.potential != Some(potential) {
                return false;
            }
        }
        if let Some(min) = self.min_priority {
            if record.priority < min {
                return false;
            }
        }
        true
    }

    /// Run the combined filters. Results keep original order unless a
    /// minimum priority is set, in which case they are sorted descending by
    /// priority (stable, ties keep original order).
    pub fn run<'a>(&self, store: &'a LeadStore) -> Vec<&'a Establishment> {
        let mut results: Vec<&Establishment> = store
            .records()
            .iter()
            .filter(|record| self.matches(record))
            .collect();

        if self.min_priority.is_some() {
            results.sort_by(|a, b| b.priority.cmp(&a.priority));
        }

        results
    }
}
