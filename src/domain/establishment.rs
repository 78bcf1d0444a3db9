//! Lead record model
//!
//! One `Establishment` is one scouted business. The struct's field set is the
//! file format: the backing JSON array stores these fields flattened, one
//! object per record, and CSV export uses the same fields in the same order.

use crate::domain::categories::{BusinessType, ContactStatus, DigitalPresence, Potential};
use crate::error::{LeadmapError, Result};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Highest meaningful contact priority (5 = contact first, 0 = unscored)
pub const MAX_PRIORITY: u8 = 5;

/// Serialization of the mapping timestamp as `YYYY-MM-DD HH:MM:SS`
pub mod mapped_at_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)
    }
}

fn now_timestamp() -> NaiveDateTime {
    use chrono::Timelike;
    // Truncate to whole seconds so the serialized form round-trips exactly.
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// One scouted business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Establishment {
    // Identity
    pub name: String,
    pub address: String,
    pub neighborhood: String,
    pub business_type: BusinessType,

    // Digital presence
    #[serde(default)]
    pub has_website: bool,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub has_instagram: bool,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub has_facebook: bool,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub has_google_business: bool,
    #[serde(default)]
    pub digital_presence: Option<DigitalPresence>,

    // Physical observations
    #[serde(default)]
    pub appearance: Option<String>,
    #[serde(default)]
    pub foot_traffic: Option<String>,

    // Identified needs
    #[serde(default)]
    pub needs_website: bool,
    #[serde(default)]
    pub needs_management_system: bool,
    #[serde(default)]
    pub needs_digital_marketing: bool,
    #[serde(default)]
    pub needs_booking_system: bool,
    #[serde(default)]
    pub needs_ecommerce: bool,

    // Sales assessment
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub potential: Option<Potential>,
    #[serde(default)]
    pub priority: u8,

    // Metadata
    #[serde(default = "now_timestamp", with = "mapped_at_format")]
    pub mapped_at: NaiveDateTime,
    #[serde(default)]
    pub contact_status: ContactStatus,
}

impl Establishment {
    /// Create a record with the mandatory identity fields; everything else
    /// starts at its default. Fails if a mandatory field is blank.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        neighborhood: impl Into<String>,
        business_type: BusinessType,
    ) -> Result<Self> {
        let record = Establishment {
            name: name.into(),
            address: address.into(),
            neighborhood: neighborhood.into(),
            business_type,
            has_website: false,
            website_url: None,
            has_instagram: false,
            instagram_url: None,
            has_facebook: false,
            facebook_url: None,
            has_google_business: false,
            digital_presence: None,
            appearance: None,
            foot_traffic: None,
            needs_website: false,
            needs_management_system: false,
            needs_digital_marketing: false,
            needs_booking_system: false,
            needs_ecommerce: false,
            opportunities: Vec::new(),
            notes: String::new(),
            potential: None,
            priority: 0,
            mapped_at: now_timestamp(),
            contact_status: ContactStatus::default(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the model invariants: mandatory strings non-empty, priority in
    /// range. Called on construction and before persisting user input.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LeadmapError::InvalidField(
                "Establishment name must not be empty".to_string(),
            ));
        }
        if self.address.trim().is_empty() {
            return Err(LeadmapError::InvalidField(
                "Establishment address must not be empty".to_string(),
            ));
        }
        if self.neighborhood.trim().is_empty() {
            return Err(LeadmapError::InvalidField(
                "Establishment neighborhood must not be empty".to_string(),
            ));
        }
        if self.priority > MAX_PRIORITY {
            return Err(LeadmapError::InvalidField(format!(
                "Contact priority must be between 0 and {}, got {}",
                MAX_PRIORITY, self.priority
            )));
        }
        Ok(())
    }
}
