//! Read-side report aggregation

use crate::domain::categories::{BusinessType, ContactStatus};
use crate::domain::establishment::Establishment;
use std::collections::HashMap;

/// Priority at or above which a lead counts as high priority
pub const HIGH_PRIORITY_THRESHOLD: u8 = 4;

/// Aggregate counts over a set of lead records, optionally scoped to one
/// neighborhood. Pure aggregation; never mutates the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub neighborhood: Option<String>,
    pub total: usize,
    pub without_website: usize,
    pub without_instagram: usize,
    pub high_priority: usize,
    pub not_contacted: usize,
    /// Business-type frequencies, most common first
    pub by_business_type: Vec<(BusinessType, usize)>,
    /// Neighborhood frequencies, most common first
    pub by_neighborhood: Vec<(String, usize)>,
}

impl ReportSummary {
    pub fn compute(records: &[&Establishment], neighborhood: Option<&str>) -> Self {
        let total = records.len();
        let without_website = records.iter().filter(|e| !e.has_website).count();
        let without_instagram = records.iter().filter(|e| !e.has_instagram).count();
        let high_priority = records
            .iter()
            .filter(|e| e.priority >= HIGH_PRIORITY_THRESHOLD)
            .count();
        let not_contacted = records
            .iter()
            .filter(|e| e.contact_status == ContactStatus::NotContacted)
            .count();

        let mut type_counts: HashMap<BusinessType, usize> = HashMap::new();
        for record in records {
            *type_counts.entry(record.business_type).or_insert(0) += 1;
        }
        let mut by_business_type: Vec<(BusinessType, usize)> = type_counts.into_iter().collect();
        by_business_type
            .sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));

        let mut neighborhood_counts: HashMap<String, usize> = HashMap::new();
        for record in records {
            *neighborhood_counts
                .entry(record.neighborhood.clone())
                .or_insert(0) += 1;
        }
        let mut by_neighborhood: Vec<(String, usize)> = neighborhood_counts.into_iter().collect();
        by_neighborhood.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        ReportSummary {
            neighborhood: neighborhood.map(str::to_string),
            total,
            without_website,
            without_instagram,
            high_priority,
            not_contacted,
            by_business_type,
            by_neighborhood,
        }
    }

    /// Percentage of the total, rounded to one decimal place (0.0 when empty)
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (count as f64 / self.total as f64 * 1000.0).round() / 10.0
    }
}
