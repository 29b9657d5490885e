//! Logging Setup

use crate::RuntimeError;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Where log lines go
#[derive(Debug, Clone, PartialEq)]
pub enum LogTarget {
    /// Standard error, leaving stdout to program output
    Stderr,
    /// Append to a file, for processes that own the terminal
    File(PathBuf),
}

fn parse_level(level: &str) -> Result<Level, RuntimeError> {
    level
        .parse::<Level>()
        .map_err(|_| RuntimeError::InvalidLogLevel(level.to_string()))
}

/// Initialize logging for the process
pub fn init_logging(level: &str, target: LogTarget) -> Result<(), RuntimeError> {
    let level = parse_level(level)?;
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    let result = match target {
        LogTarget::Stderr => {
            let subscriber = builder.with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber)
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .map_err(|e| RuntimeError::Logging(format!("{}: {}", parent.display(), e)))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| RuntimeError::Logging(format!("{}: {}", path.display(), e)))?;

            let subscriber = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
    };

    result.map_err(|e| RuntimeError::Logging(e.to_string()))
}
