//! sentiboard CLI
//!
//! Local execution entry point for the dashboard server.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use sentiboard::{
    error::Result,
    models::Config,
    server::{self, AppState},
    services::SummaryService,
    storage::SqliteStore,
};

/// sentiboard - Review sentiment dashboard
#[derive(Parser, Debug)]
#[command(
    name = "sentiboard",
    version,
    about = "Review sentiment dashboard and classification gateway"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server
    Serve {
        /// Override the bind address from the config file
        #[arg(long)]
        bind: Option<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Print the aggregate sentiment summary
    Stats,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("sentiboard starting...");

    let mut config = Config::load_or_default(&cli.config);
    config.apply_env();

    match cli.command {
        Command::Serve { bind } => {
            config.validate()?;
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
            }

            let store = Arc::new(SqliteStore::connect(&config.database.url).await?);
            let state = AppState::new(store, &config)?;

            log::info!("Classifier endpoint: {}", state.classifier.endpoint());
            server::serve(&config.server.bind_addr, server::build_router(state)).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            log::info!("  server.bind_addr: {}", config.server.bind_addr);
            log::info!("  classifier.endpoint: {}", config.classifier.endpoint);
            log::info!("  database.url: {}", config.database.url);
        }

        Command::Stats => {
            let store = Arc::new(SqliteStore::connect(&config.database.url).await?);
            let summary = SummaryService::new(store).summary().await?;

            log::info!("Positive: {}", summary.positive_count);
            log::info!("Negative: {}", summary.negative_count);
            log::info!("Neutral:  {}", summary.neutral_count);
            log::info!("Last update: {}", summary.last_update_display);
        }
    }

    Ok(())
}
