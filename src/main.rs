use clap::Parser;
use leadmap::application::{
    add_lead, export_leads, generate_report, init, mark_contacted, upcoming_contacts,
    ConfigService, SearchOptions,
};
use leadmap::cli::{format_contact_list, format_lead_table, format_report, Cli, Commands};
use leadmap::domain::{BusinessType, DigitalPresence, Establishment, Potential};
use leadmap::error::LeadmapError;
use leadmap::infrastructure::{Config, FileSystemWorkspace, LeadStore, Workspace};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Load the workspace config and open the store at its data path
fn open_store(workspace: &FileSystemWorkspace) -> Result<(Config, LeadStore), LeadmapError> {
    let config = workspace.load_config()?;
    let data_path = workspace.data_path(&config);

    if !data_path.exists() {
        // First-run condition, informational only
        eprintln!(
            "No data file at {}; starting with an empty collection",
            data_path.display()
        );
    }

    let store = LeadStore::open(data_path)?;
    Ok((config, store))
}

fn run(cli: Cli) -> Result<(), LeadmapError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Add {
            name,
            address,
            neighborhood,
            business_type,
            website,
            website_url,
            instagram,
            instagram_url,
            facebook,
            facebook_url,
            google_business,
            digital_presence,
            appearance,
            foot_traffic,
            needs_website,
            needs_management_system,
            needs_digital_marketing,
            needs_booking_system,
            needs_ecommerce,
            opportunities,
            notes,
            potential,
            priority,
        }) => {
            let workspace = FileSystemWorkspace::discover()?;
            let (_config, mut store) = open_store(&workspace)?;

            let business_type =
                BusinessType::from_str(&business_type).map_err(LeadmapError::InvalidField)?;

            let mut record = Establishment::new(name, address, neighborhood, business_type)?;
            record.has_website = website || website_url.is_some();
            record.website_url = website_url;
            record.has_instagram = instagram || instagram_url.is_some();
            record.instagram_url = instagram_url;
            record.has_facebook = facebook || facebook_url.is_some();
            record.facebook_url = facebook_url;
            record.has_google_business = google_business;
            record.digital_presence = digital_presence
                .map(|level| DigitalPresence::from_str(&level))
                .transpose()
                .map_err(LeadmapError::InvalidField)?;
            record.appearance = appearance;
            record.foot_traffic = foot_traffic;
            record.needs_website = needs_website;
            record.needs_management_system = needs_management_system;
            record.needs_digital_marketing = needs_digital_marketing;
            record.needs_booking_system = needs_booking_system;
            record.needs_ecommerce = needs_ecommerce;
            record.opportunities = opportunities;
            record.notes = notes.unwrap_or_default();
            record.potential = potential
                .map(|level| Potential::from_str(&level))
                .transpose()
                .map_err(LeadmapError::InvalidField)?;
            record.priority = priority.unwrap_or(0);

            let name = record.name.clone();
            add_lead(&mut store, record)?;
            println!("Added '{}' ({} leads total)", name, store.len());
            Ok(())
        }
        Some(Commands::List) => {
            let workspace = FileSystemWorkspace::discover()?;
            let (_config, store) = open_store(&workspace)?;

            let leads: Vec<&Establishment> = store.records().iter().collect();
            print!("{}", ensure_newline(format_lead_table(&leads)));
            Ok(())
        }
        Some(Commands::Search {
            name,
            neighborhood,
            business_type,
            no_website,
            potential,
            min_priority,
        }) => {
            let workspace = FileSystemWorkspace::discover()?;
            let (config, store) = open_store(&workspace)?;

            let options = SearchOptions {
                name,
                neighborhood,
                business_type,
                without_website: no_website,
                potential: potential
                    .map(|level| Potential::from_str(&level))
                    .transpose()
                    .map_err(LeadmapError::InvalidField)?,
                // A bare --min-priority falls back to the configured threshold
                min_priority: min_priority.map(|value| value.unwrap_or(config.min_priority)),
            };

            let results = options.run(&store);
            if !options.is_unfiltered() {
                println!("{} lead(s) found", results.len());
            }
            print!("{}", ensure_newline(format_lead_table(&results)));
            Ok(())
        }
        Some(Commands::Report { neighborhood }) => {
            let workspace = FileSystemWorkspace::discover()?;
            let (_config, store) = open_store(&workspace)?;

            let summary = generate_report(&store, neighborhood.as_deref())?;
            print!("{}", ensure_newline(format_report(&summary)));
            Ok(())
        }
        Some(Commands::Contacts { limit }) => {
            let workspace = FileSystemWorkspace::discover()?;
            let (config, store) = open_store(&workspace)?;

            let limit = limit.unwrap_or(config.contact_limit);
            let pending = upcoming_contacts(&store, limit);
            print!("{}", ensure_newline(format_contact_list(&pending)));
            Ok(())
        }
        Some(Commands::MarkContacted { position }) => {
            let workspace = FileSystemWorkspace::discover()?;
            let (_config, mut store) = open_store(&workspace)?;

            let name = mark_contacted(&mut store, position)?;
            println!("Marked '{}' as contacted", name);
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let workspace = FileSystemWorkspace::discover()?;
            let (_config, store) = open_store(&workspace)?;

            let output = output.unwrap_or_else(|| workspace.root().join("leads.csv"));
            if export_leads(&store, &output)? {
                println!("Exported {} leads to {}", store.len(), output.display());
            } else {
                eprintln!("Warning: no leads to export; nothing written");
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let workspace = FileSystemWorkspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                println!("data_file = {}", config.data_file);
                println!("min_priority = {}", config.min_priority);
                println!("contact_limit = {}", config.contact_limit);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: leadmap config [--list | <key> [<value>]]");
                println!("Valid keys: data_file, min_priority, contact_limit, created");
                Ok(())
            }
        }
        None => {
            println!("leadmap - Business-lead mapping for city district scouting");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Formatting helpers return strings with or without a trailing newline;
/// normalize before printing with `print!`.
fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
