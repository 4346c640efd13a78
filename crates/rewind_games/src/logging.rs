//! Tracing setup.

use crate::Config;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the configured log file.
///
/// Output never goes to the terminal, which belongs to the TUI. `RUST_LOG`
/// takes precedence over the configured filter.
pub fn init_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tracing::info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}
