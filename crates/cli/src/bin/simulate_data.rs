//! Synthetic sensor data generator

use runtime::{init_logging, AppConfig, LogTarget};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config.log_level, LogTarget::Stderr)?;

    info!("=== Sensor Simulator v{} ===", env!("CARGO_PKG_VERSION"));
    cli::simulate(&config)?;

    Ok(())
}
