// src/main.rs

use anyhow::Result;
use clap::Parser;
use lineembed::cli::Cli;
use lineembed::config::ConfigBuilder;
use lineembed::run;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging. Stays quiet on success unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lineembed=warn")),
        )
        .init();

    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let args = Cli::parse();

    // --- Configuration & Execution ---
    let config = ConfigBuilder::from_cli(args).build()?;
    log::debug!("Configuration built successfully: {:?}", config);

    let mut stdout = io::stdout().lock();
    let result = run(&config, &mut stdout);

    // --- Error Handling ---
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
