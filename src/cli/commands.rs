//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "leadmap")]
#[command(about = "Business-lead mapping for city district scouting", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new lead-mapping workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a scouted establishment
    Add {
        /// Establishment name
        #[arg(long)]
        name: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// Neighborhood
        #[arg(long, overrides_with = "neighborhood")]
        neighborhood: String,

        /// Business type (restaurant, cafe, bar, retail, services, hotel,
        /// supermarket, bakery, other)
        #[arg(long, overrides_with = "business_type")]
        business_type: String,

        /// The establishment has a website
        #[arg(long)]
        website: bool,

        /// Website URL (implies --website)
        #[arg(long)]
        website_url: Option<String>,

        /// The establishment has an Instagram account
        #[arg(long)]
        instagram: bool,

        /// Instagram handle or URL (implies --instagram)
        #[arg(long)]
        instagram_url: Option<String>,

        /// The establishment has a Facebook page
        #[arg(long)]
        facebook: bool,

        /// Facebook URL (implies --facebook)
        #[arg(long)]
        facebook_url: Option<String>,

        /// The establishment has a Google Business listing
        #[arg(long)]
        google_business: bool,

        /// Overall digital presence (none, basic, intermediate, advanced)
        #[arg(long)]
        digital_presence: Option<String>,

        /// Free-text appearance note
        #[arg(long)]
        appearance: Option<String>,

        /// Apparent foot traffic (free text, e.g. high/medium/low)
        #[arg(long)]
        foot_traffic: Option<String>,

        /// Needs a website
        #[arg(long)]
        needs_website: bool,

        /// Needs a management system
        #[arg(long)]
        needs_management_system: bool,

        /// Needs digital marketing
        #[arg(long)]
        needs_digital_marketing: bool,

        /// Needs a booking system
        #[arg(long)]
        needs_booking_system: bool,

        /// Needs e-commerce
        #[arg(long)]
        needs_ecommerce: bool,

        /// Identified opportunity (repeatable)
        #[arg(long = "opportunity")]
        opportunities: Vec<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Potential-client level (low, medium, high, very-high)
        #[arg(long)]
        potential: Option<String>,

        /// Contact priority, 1-5 (5 = contact first)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        priority: Option<u8>,
    },

    /// List all leads in store order
    List,

    /// Search and filter leads
    Search {
        /// Substring match on name (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Substring match on neighborhood (case-insensitive)
        #[arg(long)]
        neighborhood: Option<String>,

        /// Substring match on business type (case-insensitive)
        #[arg(long)]
        business_type: Option<String>,

        /// Only leads without a website
        #[arg(long)]
        no_website: bool,

        /// Exact match on potential level (low, medium, high, very-high)
        #[arg(long)]
        potential: Option<String>,

        /// Minimum contact priority; results sorted highest first. Without a
        /// value, the configured min_priority threshold is used
        #[arg(long, num_args = 0..=1, value_parser = clap::value_parser!(u8).range(0..=5))]
        min_priority: Option<Option<u8>>,
    },

    /// Aggregate report, optionally scoped to one neighborhood
    Report {
        /// Restrict to a neighborhood (case-insensitive substring)
        #[arg(long)]
        neighborhood: Option<String>,
    },

    /// List the next leads to contact
    Contacts {
        /// Maximum number of leads to show (default from config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Mark the lead at the given list position as contacted
    MarkContacted {
        /// 1-based position, as shown by 'leadmap list'
        position: usize,
    },

    /// Export all leads to CSV
    Export {
        /// Output file (default: leads.csv in the workspace root)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
