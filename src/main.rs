//! Fullcast main entry point
//!
//! This is the command-line interface for the fullcast credits extractor.

use anyhow::Context;
use clap::Parser;
use fullcast::config::{load_config, Config, Mode};
use fullcast::report::print_report;
use fullcast::runner;
use fullcast::source::credits_url;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fullcast: an IMDb full-credits cast extractor
///
/// Fullcast fetches the full-credits page for each configured title, either
/// live or from local fixture files, extracts the top of the cast list, and
/// prints the results.
#[derive(Parser, Debug)]
#[command(name = "fullcast")]
#[command(version = "1.0.0")]
#[command(about = "Extract cast lists from full-credits pages", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be requested without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let records = runner::run(&config)
        .await
        .context("extraction run failed")?;

    print_report(&records).context("failed to write report")?;

    tracing::info!("Execution completed.");

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fullcast=info,warn"),
            1 => EnvFilter::new("fullcast=debug,info"),
            2 => EnvFilter::new("fullcast=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &Config) {
    println!("=== Fullcast Dry Run ===\n");

    println!("Extractor Configuration:");
    println!(
        "  Mode: {}",
        match config.extractor.mode {
            Mode::Live => "live",
            Mode::Simulated => "simulated",
        }
    );
    println!("  Actor limit: {}", config.extractor.actor_limit);
    match config.extractor.mode {
        Mode::Live => println!("  Base URL: {}", config.extractor.base_url),
        Mode::Simulated => println!("  Fixture directory: {}", config.extractor.fixture_dir),
    }

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.client_name);
    println!("  Version: {}", config.user_agent.client_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nTitles ({}):", config.titles.len());
    for title in &config.titles {
        println!(
            "  - {} ({}) -> {}",
            title.name,
            title.id,
            credits_url(&config.extractor.base_url, &title.id)
        );
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would request {} titles", config.titles.len());
}
