//! Headless runner for Game of Life scenarios.
//!
//! Usage: `life-runner [scenario.json]`. Without an argument the default
//! scenario (a random classic board) is run. Logging is controlled via
//! `RUST_LOG`.

mod scenario;

use anyhow::{Context, Result};
use life_core::ScenarioConfig;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<ScenarioConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read scenario file {path}"))?;
            let config: ScenarioConfig =
                serde_json::from_str(&raw).context("failed to parse scenario file")?;
            Ok(config)
        }
        None => Ok(ScenarioConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = load_config()?;
    info!(mode = ?config.mode, pattern = ?config.pattern, "starting scenario");

    let report = scenario::run(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
