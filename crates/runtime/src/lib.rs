//! Runtime Support
//!
//! Configuration loading and logging initialisation for the maintenance
//! binaries.

mod logging;
mod settings;

pub use logging::{init_logging, LogTarget};
pub use settings::{AppConfig, CONFIG_FILE_STEM, ENV_PREFIX};

use thiserror::Error;

/// Errors while setting up a process
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
