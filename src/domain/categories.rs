//! Category enumerations for lead records
//!
//! All category fields are closed label sets. They are stored as kebab-case
//! strings in the backing file and parsed case-insensitively on input, so a
//! typo can never silently become a new category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of business an establishment runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    Restaurant,
    Cafe,
    Bar,
    Retail,
    Services,
    Hotel,
    Supermarket,
    Bakery,
    Other,
}

impl BusinessType {
    /// Human-readable label used in tables and reports
    pub fn label(&self) -> &'static str {
        match self {
            BusinessType::Restaurant => "Restaurant",
            BusinessType::Cafe => "Café",
            BusinessType::Bar => "Bar",
            BusinessType::Retail => "Retail",
            BusinessType::Services => "Services",
            BusinessType::Hotel => "Hotel",
            BusinessType::Supermarket => "Supermarket",
            BusinessType::Bakery => "Bakery",
            BusinessType::Other => "Other",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BusinessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restaurant" => Ok(BusinessType::Restaurant),
            "cafe" | "café" => Ok(BusinessType::Cafe),
            "bar" => Ok(BusinessType::Bar),
            "retail" => Ok(BusinessType::Retail),
            "services" => Ok(BusinessType::Services),
            "hotel" => Ok(BusinessType::Hotel),
            "supermarket" => Ok(BusinessType::Supermarket),
            "bakery" => Ok(BusinessType::Bakery),
            "other" => Ok(BusinessType::Other),
            _ => Err(format!(
                "Invalid business type: '{}'. Valid types are: restaurant, cafe, \
                bar, retail, services, hotel, supermarket, bakery, other",
                s
            )),
        }
    }
}

/// Coarse summary of how much online presence a business already has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigitalPresence {
    /// No online presence at all
    None,
    /// Social media only
    Basic,
    /// Simple site plus social media
    Intermediate,
    /// Professional site with e-commerce
    Advanced,
}

impl fmt::Display for DigitalPresence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DigitalPresence::None => "none",
            DigitalPresence::Basic => "basic",
            DigitalPresence::Intermediate => "intermediate",
            DigitalPresence::Advanced => "advanced",
        };
        f.write_str(label)
    }
}

impl FromStr for DigitalPresence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(DigitalPresence::None),
            "basic" => Ok(DigitalPresence::Basic),
            "intermediate" => Ok(DigitalPresence::Intermediate),
            "advanced" => Ok(DigitalPresence::Advanced),
            _ => Err(format!(
                "Invalid digital presence level: '{}'. Valid levels are: \
                none, basic, intermediate, advanced",
                s
            )),
        }
    }
}

/// Sales-assessment label estimating how valuable closing this lead would be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Potential {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for Potential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Potential::Low => "low",
            Potential::Medium => "medium",
            Potential::High => "high",
            Potential::VeryHigh => "very-high",
        };
        f.write_str(label)
    }
}

impl FromStr for Potential {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Potential::Low),
            "medium" => Ok(Potential::Medium),
            "high" => Ok(Potential::High),
            "very-high" | "very high" => Ok(Potential::VeryHigh),
            _ => Err(format!(
                "Invalid potential level: '{}'. Valid levels are: low, medium, \
                high, very-high",
                s
            )),
        }
    }
}

/// Where the lead sits in the outreach pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    #[default]
    NotContacted,
    Contacted,
    MeetingScheduled,
    ProposalSent,
    Client,
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContactStatus::NotContacted => "not-contacted",
            ContactStatus::Contacted => "contacted",
            ContactStatus::MeetingScheduled => "meeting-scheduled",
            ContactStatus::ProposalSent => "proposal-sent",
            ContactStatus::Client => "client",
        };
        f.write_str(label)
    }
}

impl FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not-contacted" | "not contacted" => Ok(ContactStatus::NotContacted),
            "contacted" => Ok(ContactStatus::Contacted),
            "meeting-scheduled" | "meeting scheduled" => Ok(ContactStatus::MeetingScheduled),
            "proposal-sent" | "proposal sent" => Ok(ContactStatus::ProposalSent),
            "client" => Ok(ContactStatus::Client),
            _ => Err(format!(
                "Invalid contact status: '{}'. Valid statuses are: not-contacted, \
                contacted, meeting-scheduled, proposal-sent, client",
                s
            )),
        }
    }
}
