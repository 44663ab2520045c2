// Rust guideline compliant 2026-10-18

//! Rentals CLI Application
//!
//! Command-line front end for catalog search and checkout step gating.

use clap::Parser;
use rental_cli::commands::{self, search::SearchArgs};
use rental_cli::{create_formatter, logging};
use rental_core::Config;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rentals",
    version,
    about = "Rentals: catalog search and checkout gating",
    after_help = "Examples:\n  rentals search \"canon r5\" --catalog listings.jsonl --max-price 100 --sort price\n  rentals suggest cam --catalog listings.jsonl\n  rentals flow --complete item-detail,rental-period --current review-order\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory containing config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Search a catalog
    Search {
        /// Free-text query; every word must match
        #[arg(default_value = "")]
        query: String,

        /// Catalog file (JSON Lines or JSON array)
        #[arg(long)]
        catalog: PathBuf,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Filter by location substring
        #[arg(long)]
        location: Option<String>,

        /// Minimum daily price
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum daily price
        #[arg(long)]
        max_price: Option<f64>,

        /// Minimum rating
        #[arg(long)]
        min_rating: Option<f64>,

        /// Sort by relevance, price, price_desc, rating or name
        #[arg(long)]
        sort: Option<String>,
    },

    /// Suggest completions for the last word of a query
    Suggest {
        /// Text typed so far
        query: String,

        /// Catalog file (JSON Lines or JSON array)
        #[arg(long)]
        catalog: PathBuf,

        /// Maximum number of suggestions
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Replay checkout step completions and show gating
    Flow {
        /// Steps to mark completed, in order
        #[arg(long, value_delimiter = ',')]
        complete: Vec<String>,

        /// Step to place the current pointer on
        #[arg(long)]
        current: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_dir = cli.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = Config::load(&config_dir)?;
    let log_level = cli.log_level.as_deref().unwrap_or(config.log_level.as_str());
    logging::init_tracing(log_level)?;

    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    let formatter = create_formatter(format, use_color);

    let result = match cli.command {
        Some(Commands::Search {
            query,
            catalog,
            category,
            location,
            min_price,
            max_price,
            min_rating,
            sort,
        }) => {
            let args = SearchArgs {
                category,
                location,
                min_price,
                max_price,
                min_rating,
                sort,
            };
            commands::search::execute(&catalog, &query, &args, &config, formatter.as_ref())
        }
        Some(Commands::Suggest {
            query,
            catalog,
            limit,
        }) => commands::suggest::execute(&catalog, &query, limit, &config, formatter.as_ref()),
        Some(Commands::Flow { complete, current }) => {
            commands::flow::execute(&complete, current.as_deref(), formatter.as_ref())
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("{}", formatter.format_error(&err.to_string()));
        std::process::exit(1);
    }

    Ok(())
}
