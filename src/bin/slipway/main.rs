//! Slipway CLI - evaluates the build-target configuration once.
//!
//! Reads `CROSSCOMPILE_TARGET`, `CC`, `LD`, and `AR` from the
//! environment (the entire external surface; there are no flags) and
//! writes the composed target declarations to stdout as JSON. Logs go
//! to stderr.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use slipway::{compose, EnvSnapshot};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("slipway=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let env = EnvSnapshot::capture();
    let registry = compose(&env)?;

    serde_json::to_writer_pretty(std::io::stdout().lock(), registry.targets())?;
    println!();

    Ok(())
}
