//! Gallery-Trawl main entry point
//!
//! This is the command-line interface for the Gallery-Trawl discovery engine.

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use gallery_trawl::config::{load_or_default, Config};
use gallery_trawl::output::{
    format_markdown_summary, print_discovery, to_json, write_markdown_summary, DiscoveryReport,
};
use gallery_trawl::{ProgressSink, SeedInput, Source, Trawler};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Gallery-Trawl: multi-source media discovery
///
/// Gallery-Trawl finds the albums a username or URL refers to on a gallery
/// host, walks their pages, and lists the direct media URLs it finds.
#[derive(Parser, Debug)]
#[command(name = "gallery-trawl")]
#[command(version)]
#[command(about = "Discover albums and media URLs on gallery hosts", long_about = None)]
struct Cli {
    /// Source to trawl (erome, bunkr, fapello, jpg5)
    #[arg(value_name = "SOURCE")]
    source: Source,

    /// Username, search query, or album URL
    #[arg(value_name = "SEED")]
    seed: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// List albums only, without collecting their media
    #[arg(long)]
    albums_only: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also write a markdown report to this path
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Show the effective configuration and first pages without fetching
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Markdown,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_or_default(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Invalid default configuration".to_string(),
    })?;

    if cli.dry_run {
        handle_dry_run(&config, &cli)
    } else {
        handle_discovery(config, &cli).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gallery_trawl=info,warn"),
            1 => EnvFilter::new("gallery_trawl=debug,info"),
            2 => EnvFilter::new("gallery_trawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the configuration and the first pages
fn handle_dry_run(config: &Config, cli: &Cli) -> anyhow::Result<()> {
    println!("=== Gallery-Trawl Dry Run ===\n");

    let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
    println!("Effective configuration:\n");
    println!("{}", rendered);

    let seed = SeedInput::parse(&cli.seed)?;
    let urls = cli.source.entry_urls(config, &seed);

    println!("Source: {}", cli.source);
    println!("Seed: {}", seed);
    println!("\nWould start from {} page(s):", urls.len());
    for url in &urls {
        println!("  - {}", url);
    }

    println!("\n✓ Configuration is valid");
    Ok(())
}

/// Handles a discovery run and renders its result
async fn handle_discovery(config: Config, cli: &Cli) -> anyhow::Result<()> {
    let (progress, mut rx) = ProgressSink::channel();
    let quiet = cli.quiet;
    let printer = tokio::spawn(async move {
        while let Some(line) = rx.recv().await {
            if !quiet {
                eprintln!("{}", line);
            }
        }
    });

    let trawler = Trawler::new(config)?.with_progress(progress);
    let started_at = Utc::now();

    let discovery = if cli.albums_only {
        trawler.search_albums(cli.source, &cli.seed).await
    } else {
        trawler.discover(cli.source, &cli.seed).await
    };

    // Closes the progress channel so the printer can finish
    drop(trawler);
    if let Err(e) = printer.await {
        tracing::warn!("Progress printer stopped: {}", e);
    }

    let report = DiscoveryReport::finish(
        cli.source,
        cli.seed.trim(),
        started_at,
        cli.albums_only,
        discovery,
    );

    match cli.format {
        Format::Text => print_discovery(&report),
        Format::Json => println!("{}", to_json(&report)?),
        Format::Markdown => print!("{}", format_markdown_summary(&report)),
    }

    if let Some(path) = &cli.summary {
        write_markdown_summary(&report, path)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        tracing::info!("Summary written to {}", path.display());
    }

    Ok(())
}
