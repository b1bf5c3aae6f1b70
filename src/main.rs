//! iconcache CLI - load the icon library and inspect its cache.
//!
//! The default invocation runs a full load through the configured tier and
//! prints a summary. `--entries` and `--purge` are the debug tooling over
//! the cache region: list what is stored, or empty it entirely.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use iconcache::cache::ICONS_LIBRARY_REGION;
use iconcache::{CacheRegion, Config, IconLibraryLoader};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Set up logging with environment-based filter
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::load()?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "--entries" {
        return list_entries(&config);
    }
    if args.len() > 1 && args[1] == "--purge" {
        return purge(&config);
    }

    info!("Loading icon library");

    let loader = IconLibraryLoader::from_config(&config)?;
    let library = loader.load().await?;

    println!(
        "Loaded {} icons across {} categories",
        library.icon_count(),
        library.category_count()
    );

    Ok(())
}

/// List every entry in the icons-library cache region
fn list_entries(config: &Config) -> Result<()> {
    let region = CacheRegion::open(&config.cache_dir()?, ICONS_LIBRARY_REGION)?;
    let entries = region.entries()?;

    if entries.is_empty() {
        println!("Cache region is empty");
        return Ok(());
    }

    for entry in entries {
        println!(
            "{}  {}  {} bytes",
            entry.url,
            entry.age_display(),
            entry.size_bytes()
        );
    }

    Ok(())
}

/// Empty the icons-library cache region
fn purge(config: &Config) -> Result<()> {
    let region = CacheRegion::open(&config.cache_dir()?, ICONS_LIBRARY_REGION)?;
    region.purge()?;
    println!("Cache region purged");
    Ok(())
}
