//! Output formatting utilities

use crate::domain::{Establishment, ReportSummary};

/// Format leads as a positioned table for display
pub fn format_lead_table(leads: &[&Establishment]) -> String {
    if leads.is_empty() {
        return "No leads found".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<4} {:<28} {:<18} {:<12} {:>8}  {}\n",
        "#", "Name", "Neighborhood", "Type", "Priority", "Status"
    ));
    for (i, lead) in leads.iter().enumerate() {
        output.push_str(&format!(
            "{:<4} {:<28} {:<18} {:<12} {:>7}/5  {}\n",
            i + 1,
            lead.name,
            lead.neighborhood,
            lead.business_type.to_string(),
            lead.priority,
            lead.contact_status
        ));
    }
    output
}

/// Format the aggregate report for display
pub fn format_report(summary: &ReportSummary) -> String {
    if summary.total == 0 {
        return "No establishments found".to_string();
    }

    let mut output = String::new();
    output.push_str("Mapping report\n");
    if let Some(neighborhood) = &summary.neighborhood {
        output.push_str(&format!("Neighborhood: {}\n", neighborhood));
    }
    output.push_str(&format!("Total establishments: {}\n", summary.total));
    output.push_str(&format!(
        "Without website: {} ({:.1}%)\n",
        summary.without_website,
        summary.percent(summary.without_website)
    ));
    output.push_str(&format!(
        "Without Instagram: {} ({:.1}%)\n",
        summary.without_instagram,
        summary.percent(summary.without_instagram)
    ));
    output.push_str(&format!(
        "High priority: {} ({:.1}%)\n",
        summary.high_priority,
        summary.percent(summary.high_priority)
    ));
    output.push_str(&format!("Not contacted: {}\n", summary.not_contacted));

    output.push_str("\nBy business type:\n");
    for (business_type, count) in &summary.by_business_type {
        output.push_str(&format!("  {}: {}\n", business_type, count));
    }

    output.push_str("\nBy neighborhood:\n");
    for (neighborhood, count) in &summary.by_neighborhood {
        output.push_str(&format!("  {}: {}\n", neighborhood, count));
    }

    output
}

/// Format the upcoming-contacts list for display
pub fn format_contact_list(leads: &[&Establishment]) -> String {
    if leads.is_empty() {
        return "All establishments have been contacted".to_string();
    }

    let mut output = String::new();
    for (i, lead) in leads.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, lead.name));
        output.push_str(&format!("   {} - {}\n", lead.address, lead.neighborhood));
        output.push_str(&format!("   Priority: {}/5\n", lead.priority));
        if !lead.opportunities.is_empty() {
            let top: Vec<&str> = lead
                .opportunities
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            output.push_str(&format!("   Opportunities: {}\n", top.join(", ")));
        }
        output.push('\n');
    }
    output
}
