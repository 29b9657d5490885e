//! Maintenance classifier trainer

use runtime::{init_logging, AppConfig, LogTarget};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config.log_level, LogTarget::Stderr)?;

    info!("=== Model Trainer v{} ===", env!("CARGO_PKG_VERSION"));
    cli::train(&config)?;

    Ok(())
}
