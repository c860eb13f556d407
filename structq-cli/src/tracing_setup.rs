//! Tracing setup for the structq CLI
//!
//! Logs go to stderr; stdout carries only the result set.
//!
//! Usage:
//!   structq --debug ...              # Debug logging
//!   RUST_LOG=structq=debug structq   # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used unless RUST_LOG is set)
    pub debug: bool,
}

/// Initialize console tracing on stderr
pub fn init(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
