//! # Crossroads CLI (`crossroads`)
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `crossroads serve` | Start the start-page HTTP server |
//! | `crossroads resolve <query>` | Print where a query would redirect |
//! | `crossroads check` | Validate the catalog and report shared keywords |
//! | `crossroads items` | List every item the engine can see |
//!
//! ## Examples
//!
//! ```bash
//! crossroads --config ./config/crossroads.toml serve
//! crossroads resolve gh tokio runtime
//! crossroads resolve --json grafana
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crossroads::logging::{self, Verbosity};
use crossroads::{check, config, items, resolve, server};

/// Crossroads — a start page with keyword search redirects.
#[derive(Parser)]
#[command(
    name = "crossroads",
    about = "Crossroads — a start page with keyword search redirects",
    version
)]
struct Cli {
    /// Path to the settings file (TOML).
    #[arg(long, global = true, default_value = "./config/crossroads.toml")]
    config: PathBuf,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log errors only.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    ///
    /// Serves the dashboard, the catalog API, and `/?q=` redirects on the
    /// address configured in `[server].bind`.
    Serve,

    /// Resolve a query against the catalog.
    ///
    /// Prints the destination URL, or `No resolution.` when the query would
    /// show the dashboard.
    Resolve {
        /// The query, e.g. `gh tokio`. Multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print the full resolution as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate the catalog.
    ///
    /// Fails on a catalog that does not parse and lists keywords shared by
    /// several items.
    Check,

    /// List the catalog's items.
    Items,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
        Commands::Resolve { query, json } => {
            resolve::run_resolve(&cfg, &query.join(" "), json).await?;
        }
        Commands::Check => {
            check::run_check(&cfg).await?;
        }
        Commands::Items => {
            items::list_items(&cfg).await?;
        }
    }

    Ok(())
}
