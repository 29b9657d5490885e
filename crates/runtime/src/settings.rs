//! Application Configuration

use crate::RuntimeError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Optional config file looked up in the working directory (`pdm.toml`, ...)
pub const CONFIG_FILE_STEM: &str = "pdm";

/// Prefix of overriding environment variables (`PDM_MODEL_PATH`, ...)
pub const ENV_PREFIX: &str = "PDM";

/// Settings shared by every maintenance tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Sensor data file written by the simulator and read by the trainer
    pub data_path: PathBuf,
    /// Classifier artifact
    pub model_path: PathBuf,
    /// Max log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Dashboard log file; the terminal is owned by the UI
    pub dashboard_log_path: PathBuf,
    /// Simulator seed; entropy when unset
    pub seed: Option<u64>,
    /// Decision tree depth limit
    pub max_depth: usize,
    /// Smallest node the trainer will split
    pub min_samples_split: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/sensor_data.csv"),
            model_path: PathBuf::from("models/maintenance_model.json"),
            log_level: "info".to_string(),
            dashboard_log_path: PathBuf::from("logs/dashboard.log"),
            seed: None,
            max_depth: 6,
            min_samples_split: 2,
        }
    }
}

impl AppConfig {
    /// Defaults, then `pdm.*` in the working directory, then `PDM_*`
    /// environment variables
    pub fn load() -> Result<Self, RuntimeError> {
        Self::build(
            File::with_name(CONFIG_FILE_STEM).required(false),
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    fn build<F, E>(file: F, env: E) -> Result<Self, RuntimeError>
    where
        F: config::Source + Send + Sync + 'static,
        E: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder().add_source(file).add_source(env).build()?;
        let config: Self = settings.try_deserialize()?;

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(map))
    }

    fn no_file() -> impl config::Source + Send + Sync + 'static {
        File::with_name("definitely-not-a-config-file").required(false)
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = AppConfig::build(no_file(), env(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.model_path, PathBuf::from("models/maintenance_model.json"));
        assert_eq!(config.data_path, PathBuf::from("data/sensor_data.csv"));
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::build(
            no_file(),
            env(&[
                ("PDM_MODEL_PATH", "/tmp/model.json"),
                ("PDM_SEED", "42"),
                ("PDM_MAX_DEPTH", "3"),
            ]),
        )
        .unwrap();

        assert_eq!(config.model_path, PathBuf::from("/tmp/model.json"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_file_then_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pdm.toml");
        std::fs::write(
            &path,
            "data_path = \"sim/readings.csv\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = AppConfig::build(
            File::from(path.as_path()),
            env(&[("PDM_LOG_LEVEL", "warn")]),
        )
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("sim/readings.csv"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_required_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let result = AppConfig::build(
            File::from(missing.as_path()).required(true),
            env(&[]),
        );
        assert!(matches!(result, Err(RuntimeError::Config(_))));
    }
}
