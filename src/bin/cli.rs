//! Catalog Crawler CLI
//!
//! Local execution entry point for catalog ingestion.

use std::path::PathBuf;

use catalog_crawler::{
    error::Result,
    models::Config,
    pipeline::{self, IngestOptions},
    services::ApiClient,
    storage::{CourseStore, LocalStorage},
};
use clap::{Parser, Subcommand};

/// catalog-crawler - University Course Catalog Ingestion
#[derive(Parser, Debug)]
#[command(
    name = "catalog-crawler",
    version,
    about = "Course catalog ingestion with grade and semester enrichment"
)]

struct Cli {
    /// Path to storage directory containing config files
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, enrich and store the course catalog
    Ingest {
        /// Reference year for terms and semester index (default: last year)
        #[arg(long)]
        year: Option<i32>,

        /// Maximum catalog requests per second
        #[arg(long)]
        rps: Option<u32>,

        /// Courses per catalog page (at most 100)
        #[arg(long)]
        page_size: Option<u32>,

        /// Ingest even if the store already holds courses, replacing them
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration files
    Validate,

    /// Show stored catalog info
    Info,
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

    log::info!("Catalog crawler starting...");

    // Load configurations
    let config_path = cli.storage_dir.join("config.toml");
    let mut config = Config::load_or_default(&config_path);

    log::info!("Loaded configuration from {}", cli.storage_dir.display());

    let storage = LocalStorage::new(&cli.storage_dir);

    match cli.command {
        Command::Ingest {
            year,
            rps,
            page_size,
            force,
        } => {
            if let Some(year) = year {
                config.ingest.reference_year = Some(year);
            }
            if let Some(rps) = rps {
                config.crawler.requests_per_second = rps;
            }
            if let Some(page_size) = page_size {
                config.crawler.page_size = page_size;
            }
            config.validate()?;

            let stored = storage.count().await?;
            if stored > 0 && !force {
                log::warn!(
                    "Store already holds {} courses. Use --force to ingest again.",
                    stored
                );
                return Ok(());
            }

            let api = ApiClient::new(&config.api, &config.crawler)?;
            let options = IngestOptions::from_config(&config);
            let outcome = pipeline::run_ingest(&api, &options).await;

            if !outcome.index_available {
                log::warn!("Semester data was unavailable; offered terms are empty");
            }
            if outcome.page_failures > 0 {
                log::warn!(
                    "{} term(s) ended early on a failed catalog request",
                    outcome.page_failures
                );
            }

            if outcome.courses.is_empty() {
                log::warn!("Ingestion produced no courses; store left unchanged");
                return Ok(());
            }

            let summary = if stored > 0 {
                log::info!("Replacing {} stored courses", stored);
                storage.replace_all(&outcome.courses).await?
            } else {
                storage.save_all(&outcome.courses).await?
            };
            log::info!(
                "Saved {} courses ({} duplicates, {} failed, {} skipped during refinement)",
                summary.saved,
                summary.duplicates,
                summary.failed,
                outcome.skipped.len()
            );
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());

            match storage.load_catalog().await? {
                Some(data) => {
                    log::info!("Courses stored: {}", data.count);
                    log::info!("Last updated: {}", data.updated_at);
                }
                None => log::info!("No catalog found yet."),
            }
        }
    }

    log::info!("Done!");

    Ok(())
}
