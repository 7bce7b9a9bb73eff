//! CLI entry point for the dirmirror tool.

use anyhow::{Context, Result};
use clap::Parser;
use dirmirror_core::{CrawlConfig, Crawler};
use tracing::{debug, info};
use url::Url;

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let base_url = Url::parse(&args.base_url)
        .with_context(|| format!("invalid base URL: {}", args.base_url))?;

    std::fs::create_dir_all(&args.dest).with_context(|| {
        format!(
            "cannot create destination directory {}",
            args.dest.display()
        )
    })?;

    info!(base_url = %base_url, dest = %args.dest.display(), ext = %args.ext, "starting crawl");
    if args.dry_run {
        info!("dry-run mode: no files will be saved");
    }

    let config = CrawlConfig {
        base_url,
        dest_root: args.dest,
        extension: args.ext,
        dry_run: args.dry_run,
    };

    let stats = Crawler::new(config).run().await;

    info!(
        directories = stats.directories_visited,
        listing_failures = stats.listing_failures,
        files_found = stats.files_found,
        downloaded = stats.downloaded,
        skipped = stats.skipped_existing,
        size_mismatches = stats.size_mismatches,
        download_failures = stats.download_failures,
        planned = stats.planned,
        "crawl complete"
    );

    Ok(())
}
