//! CSV export of the lead collection
//!
//! The column set is the record's field set in declaration order, matching
//! the backing JSON. List-valued fields are flattened with "; ".

use crate::error::Result;
use crate::infrastructure::LeadStore;
use serde_json::Value;
use std::path::Path;

/// Column set for export, in the record's field order
pub const CSV_FIELDS: [&str; 25] = [
    "name",
    "address",
    "neighborhood",
    "business_type",
    "has_website",
    "website_url",
    "has_instagram",
    "instagram_url",
    "has_facebook",
    "facebook_url",
    "has_google_business",
    "digital_presence",
    "appearance",
    "foot_traffic",
    "needs_website",
    "needs_management_system",
    "needs_digital_marketing",
    "needs_booking_system",
    "needs_ecommerce",
    "opportunities",
    "notes",
    "potential",
    "priority",
    "mapped_at",
    "contact_status",
];

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(cell)
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

/// Write the whole collection as UTF-8 CSV. An empty collection is a no-op:
/// no file is written and `Ok(false)` is returned so the caller can warn.
pub fn export_csv(store: &LeadStore, path: &Path) -> Result<bool> {
    if store.is_empty() {
        return Ok(false);
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_FIELDS)?;

    for record in store.records() {
        let value = serde_json::to_value(record)?;
        let row: Vec<String> = CSV_FIELDS.iter().map(|field| cell(&value[*field])).collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(true)
}
