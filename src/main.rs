//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mirrorselect` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use mirrorselect::config::{Opt, OutputFormat, GEOIP_DB_ENV};
use mirrorselect::initialization::init_logger_with;
use mirrorselect::{
    load_mirrors, MaxMindLocator, MirrorCatalog, SelectedMirror, SelectionService,
};

#[derive(Serialize)]
struct AddressReport<'a> {
    address: IpAddr,
    mirrors: &'a [SelectedMirror],
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so GEOIP_DB
    // can be set there instead of exported manually.
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let records = load_mirrors(&opt.mirrors).await?;
    let catalog = Arc::new(MirrorCatalog::new());
    catalog
        .refresh(records)
        .context("Failed to publish mirror catalog")?;

    let geoip_path = opt
        .geoip
        .clone()
        .or_else(|| std::env::var(GEOIP_DB_ENV).ok().map(PathBuf::from))
        .with_context(|| format!("No GeoIP database given: pass --geoip or set {GEOIP_DB_ENV}"))?;
    let locator = MaxMindLocator::open(&geoip_path).await?;

    let service = SelectionService::new(Arc::clone(&catalog), locator);

    for addr in &opt.addresses {
        let mirrors = service.select(*addr).await;
        match opt.format {
            OutputFormat::Text => print_text(*addr, &mirrors),
            OutputFormat::Json => {
                let report = AddressReport {
                    address: *addr,
                    mirrors: &mirrors,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
    }

    Ok(())
}

fn print_text(addr: IpAddr, mirrors: &[SelectedMirror]) {
    println!("# {} ({} mirrors)", addr, mirrors.len());
    for (i, mirror) in mirrors.iter().enumerate() {
        let tier = mirror
            .tier
            .map(|t| format!("{t:?}").to_lowercase())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>3}. {}  {}  {}/{}  {}",
            i + 1,
            mirror.record.hostname,
            mirror.record.addresses.preferred().unwrap_or("-"),
            mirror.record.country,
            mirror.record.region,
            tier
        );
    }
}
