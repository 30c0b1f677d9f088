//! # kitchen-sim
//!
//! Runs the shelf simulation against an order catalog until the requested
//! duration passes or Ctrl-C is pressed, then shuts down cleanly.
//!
//! ```bash
//! kitchen-sim --catalog data/orders.json --config kitchen.toml --run-for 60
//! ```

use clap::Parser;
use kitchen_shelves::config::KitchenConfig;
use kitchen_shelves::lifecycle::tracing::setup_tracing;
use kitchen_shelves::lifecycle::KitchenSystem;
use kitchen_shelves::sources::Catalog;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "kitchen-sim", about = "Simulate a kitchen's order-holding shelves")]
struct Args {
    /// TOML configuration file. Canonical defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON order catalog.
    #[arg(long, default_value = "data/orders.json")]
    catalog: PathBuf,

    /// Stop after this many seconds instead of waiting for Ctrl-C.
    #[arg(long)]
    run_for: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => KitchenConfig::load(path).map_err(|e| e.to_string())?,
        None => KitchenConfig::default(),
    };
    let catalog = Catalog::load(&args.catalog).map_err(|e| e.to_string())?;

    info!(entries = catalog.len(), "Starting kitchen simulation");
    let system = KitchenSystem::start(&config, catalog).map_err(|e| e.to_string())?;

    match args.run_for {
        Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
        None => tokio::signal::ctrl_c().await.map_err(|e| e.to_string())?,
    }

    let status = system.subscribe();
    system.shutdown().await?;

    let stats = status.borrow().stats;
    info!(
        received = stats.received,
        delivered = stats.delivered,
        wasted = stats.wasted,
        rejected = stats.rejected,
        "Simulation completed"
    );
    Ok(())
}
