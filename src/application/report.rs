//! Report generation use case

use crate::domain::{Establishment, ReportSummary};
use crate::error::Result;
use crate::infrastructure::LeadStore;

/// Compute aggregate counts over the store, optionally scoped to records
/// whose neighborhood matches the given query (case-insensitive substring,
/// same matching as the neighborhood search).
pub fn generate_report(store: &LeadStore, neighborhood: Option<&str>) -> Result<ReportSummary> {
    let scoped: Vec<&Establishment> = match neighborhood {
        Some(query) => store.search_by_neighborhood(query),
        None => store.records().iter().collect(),
    };

    Ok(ReportSummary::compute(&scoped, neighborhood))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BusinessType;
    use tempfile::TempDir;

    fn store() -> (TempDir, LeadStore) {
        let temp = TempDir::new().unwrap();
        let mut store = LeadStore::open(temp.path().join("leads.json")).unwrap();

        let mut cafe =
            Establishment::new("Café A", "Rua X, 1", "Chiado", BusinessType::Cafe).unwrap();
        cafe.priority = 5;
        store.add(cafe);

        let mut bar =
            Establishment::new("Bar B", "Rua Y, 2", "Alfama", BusinessType::Bar).unwrap();
        bar.has_website = true;
        store.add(bar);

        (temp, store)
    }

    #[test]
    fn test_report_over_whole_store() {
        let (_temp, store) = store();
        let summary = generate_report(&store, None).unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.without_website, 1);
        assert_eq!(summary.high_priority, 1);
        assert_eq!(summary.neighborhood, None);
    }

    #[test]
    fn test_report_scoped_to_neighborhood() {
        let (_temp, store) = store();
        let summary = generate_report(&store, Some("chiado")).unwrap();

        assert_eq!(summary.total, 1);
        assert_eq!(summary.neighborhood.as_deref(), Some("chiado"));
        assert_eq!(summary.by_business_type, vec![(BusinessType::Cafe, 1)]);
    }

    #[test]
    fn test_report_on_empty_scope() {
        let (_temp, store) = store();
        let summary = generate_report(&store, Some("nowhere")).unwrap();
        assert_eq!(summary.total, 0);
    }
}
