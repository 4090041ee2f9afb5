//! RealDesk CLI — inspect the seeded pipeline and listings, draft descriptions.
//!
//! Commands:
//! - `board` — print the pipeline board, optionally narrowed to some stages
//! - `properties` — list listings, optionally filtered by a search query
//! - `describe` — draft a listing description with the configured generator

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use realdesk_core::board::partition;
use realdesk_core::money::{format_thousands, format_usd};
use realdesk_core::{
    config, describe, seed, AppConfig, DescriptionRequest, LeadStatus, LeadStore, Property,
    StatusFilter,
};

#[derive(Parser)]
#[command(
    name = "realdesk",
    version,
    about = "RealDesk CLI — real-estate listings and sales pipeline"
)]
struct Cli {
    /// Config file (TOML). Defaults to the user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the pipeline board.
    Board {
        /// Only show these stages (repeatable). All stages when omitted.
        #[arg(long = "status")]
        statuses: Vec<LeadStatus>,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List property listings, newest first.
    Properties {
        /// Case-insensitive match on title or address.
        #[arg(long)]
        search: Option<String>,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Draft a listing description.
    Describe {
        #[arg(long)]
        title: String,

        /// Key features, e.g. "3 bed, 2 bath, garden".
        #[arg(long)]
        features: String,

        /// Tone of voice. Defaults to the configured tone.
        #[arg(long)]
        tone: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    let cfg = AppConfig::load(&config_path)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.filter)),
        )
        .init();
    tracing::debug!(config = %config_path.display(), "config loaded");

    match cli.command {
        Commands::Board { statuses, json } => {
            let store = seed::leads();
            let filter = filter_from(&statuses);
            if json {
                println!("{}", serde_json::to_string_pretty(&board_json(&store, &filter))?);
            } else {
                print!("{}", board_text(&store, &filter));
            }
        }
        Commands::Properties { search, json } => {
            let catalog = seed::properties();
            let listings = catalog.search(search.as_deref().unwrap_or(""));
            if json {
                println!("{}", serde_json::to_string_pretty(&listings)?);
            } else {
                print!("{}", properties_text(&listings));
            }
        }
        Commands::Describe {
            title,
            features,
            tone,
        } => {
            let generator = describe::from_config(&cfg.describe);
            tracing::info!(generator = generator.name(), "drafting description");
            let request = DescriptionRequest {
                title,
                features,
                tone,
            };
            let text = generator
                .generate(&request)
                .context("Failed to generate description")?;
            println!("{text}");
        }
    }
    Ok(())
}

fn filter_from(statuses: &[LeadStatus]) -> StatusFilter {
    let mut filter = StatusFilter::new();
    for status in statuses {
        if !filter.is_selected(*status) {
            filter.toggle(*status);
        }
    }
    filter
}

fn board_text(store: &LeadStore, filter: &StatusFilter) -> String {
    let part = partition(store.leads());
    let mut out = String::new();
    for column in filter.displayed_columns() {
        out.push_str(&format!("== {} ({}) ==\n", column.label, part.count(column.status)));
        let bucket = part.bucket(column.status);
        if bucket.is_empty() {
            out.push_str("  No Leads\n");
        }
        for lead in bucket {
            out.push_str(&format!(
                "  [{}] {:<18} {:>8}  {}\n",
                lead.id,
                lead.name,
                format_thousands(lead.budget),
                lead.interest
            ));
        }
    }
    out
}

fn board_json(store: &LeadStore, filter: &StatusFilter) -> Value {
    let part = partition(store.leads());
    let columns: Vec<Value> = filter
        .displayed_columns()
        .into_iter()
        .map(|column| {
            json!({
                "status": column.status,
                "label": column.label,
                "leads": part.bucket(column.status),
            })
        })
        .collect();
    Value::Array(columns)
}

fn properties_text(listings: &[&Property]) -> String {
    if listings.is_empty() {
        return "No properties match.\n".to_string();
    }
    listings
        .iter()
        .map(|p| {
            format!(
                "{:<26} {:>12}  {:<8} {}\n",
                p.title,
                format_usd(p.price),
                p.status.to_string(),
                p.address
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_status() {
        let cli = Cli::try_parse_from([
            "realdesk", "board", "--status", "viewing", "--status", "Closed", "--json",
        ])
        .unwrap();
        let Commands::Board { statuses, json } = cli.command else {
            panic!("expected board");
        };
        assert_eq!(statuses, vec![LeadStatus::Viewing, LeadStatus::Closed]);
        assert!(json);
        assert!(Cli::try_parse_from(["realdesk", "board", "--status", "Lost"]).is_err());
    }

    #[test]
    fn duplicate_status_does_not_cancel_out() {
        let filter = filter_from(&[LeadStatus::New, LeadStatus::New]);
        assert!(filter.is_selected(LeadStatus::New));
    }

    #[test]
    fn board_text_shows_counts_and_empty_columns() {
        let text = board_text(&seed::leads(), &StatusFilter::new());
        assert!(text.contains("== New Leads (2) =="));
        assert!(text.contains("== Closed (0) ==\n  No Leads"));
        assert!(text.contains("Alice Johnson"));
    }

    #[test]
    fn board_json_respects_filter() {
        let filter = filter_from(&[LeadStatus::Viewing]);
        let value = board_json(&seed::leads(), &filter);
        let columns = value.as_array().unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0]["status"], "Viewing");
        assert_eq!(columns[0]["leads"][0]["name"], "Diana Prince");
    }

    #[test]
    fn properties_text_handles_empty() {
        assert_eq!(properties_text(&[]), "No properties match.\n");
        let catalog = seed::properties();
        let text = properties_text(&catalog.search("seattle"));
        assert!(text.contains("Modern Downtown Loft"));
    }
}
