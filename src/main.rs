//! Pricewalk main entry point
//!
//! This is the command-line interface for the pricewalk price harvester.

use anyhow::Context;
use clap::Parser;
use pricewalk::config::load_config;
use pricewalk::crawler::crawl;
use pricewalk::output::{find_saved_tables, read_table, write_results};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Pricewalk: a category-tree price harvester
///
/// Pricewalk crawls the category hierarchy of a single shop, collects
/// product names and prices from every leaf category page, and writes
/// the results to a dated CSV table.
#[derive(Parser, Debug)]
#[command(name = "pricewalk")]
#[command(version = "1.0.0")]
#[command(about = "A category-tree price harvester", long_about = None)]
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

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long, conflicts_with = "list_saved")]
    dry_run: bool,

    /// List previously saved tables and exit
    #[arg(long, conflicts_with = "dry_run")]
    list_saved: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => {
            tracing::info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.list_saved {
        handle_list_saved(&config)?;
    } else {
        handle_crawl(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pricewalk=info,warn"),
            1 => EnvFilter::new("pricewalk=debug,info"),
            2 => EnvFilter::new("pricewalk=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &pricewalk::config::Config) {
    println!("=== Pricewalk Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Catalog root: {}", config.site.root_path);

    println!("\nFetch:");
    println!("  User agent: {}", config.fetch.user_agent);
    println!("  Timeout: {}s", config.fetch.timeout_seconds);
    println!(
        "  Max concurrent requests: {}",
        config.fetch.max_concurrent_requests
    );

    println!("\nSelectors:");
    println!("  Product card: .{}", config.selectors.product_item);
    println!("  Product name: .{}", config.selectors.product_name);
    println!("  Product price: .{}", config.selectors.product_price);
    println!("  Category link: .{}", config.selectors.section_link);

    println!("\nOutput:");
    println!("  Table directory: {}", config.output.table_dir);
    println!("  Backup file: {}", config.output.backup_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would crawl {}{}",
        config.site.base_url, config.site.root_path
    );
}

/// Handles the --list-saved mode: shows previously saved tables
fn handle_list_saved(config: &pricewalk::config::Config) -> anyhow::Result<()> {
    let tables = find_saved_tables(Path::new(&config.output.table_dir))
        .with_context(|| format!("failed to list tables in {}", config.output.table_dir))?;

    if tables.is_empty() {
        println!("No saved tables in {}", config.output.table_dir);
        return Ok(());
    }

    println!("Saved tables in {}:", config.output.table_dir);
    for table in tables {
        match read_table(&table) {
            Ok((rows, first_section)) => println!(
                "  {} ({} products, first section: {})",
                table.display(),
                rows.len(),
                first_section
            ),
            Err(e) => println!("  {} (unreadable: {})", table.display(), e),
        }
    }

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: pricewalk::config::Config) -> anyhow::Result<()> {
    let output = config.output.clone();

    let results = crawl(config).await?;
    if results.is_empty() {
        tracing::warn!("Crawl finished with no sections collected");
    }

    let written = write_results(&results, &output).context("failed to write results")?;
    println!("Results saved to {}", written.display());

    Ok(())
}
