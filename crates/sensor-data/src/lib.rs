//! Sensor Data
//!
//! Synthetic temperature/vibration readings, the maintenance labeling rule,
//! and the flat-file format shared by the simulator and the trainer.

mod dataset;
mod reading;
mod simulator;

pub use dataset::{read_csv, write_csv, CSV_HEADER};
pub use reading::{
    label_for, Label, LabeledReading, SensorReading, TEMPERATURE_THRESHOLD, VIBRATION_THRESHOLD,
};
pub use simulator::{
    generate_dataset, simulate, DatasetSummary, SAMPLE_COUNT, SIMULATED_TEMPERATURE_RANGE,
    SIMULATED_VIBRATION_RANGE,
};

use thiserror::Error;

/// Errors while producing or reading sensor data files
#[derive(Debug, Error)]
pub enum SensorDataError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid label {value} on row {row} (expected 0 or 1)")]
    InvalidLabel { row: usize, value: u8 },
}
