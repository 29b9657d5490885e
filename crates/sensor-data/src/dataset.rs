//! Sensor Data File Format

use crate::reading::{Label, LabeledReading, SensorReading};
use crate::SensorDataError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Column order of the sensor data file
pub const CSV_HEADER: [&str; 4] = ["timestamp", "temperature", "vibration", "label"];

/// One row of the data file
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    timestamp: u64,
    temperature: f64,
    vibration: f64,
    label: u8,
}

impl From<&LabeledReading> for CsvRow {
    fn from(r: &LabeledReading) -> Self {
        Self {
            timestamp: r.reading.timestamp,
            temperature: r.reading.temperature,
            vibration: r.reading.vibration,
            label: r.label.as_u8(),
        }
    }
}

/// Write labeled readings to `path`, header first, truncating any existing
/// file. Missing parent directories are created.
pub fn write_csv(path: &Path, readings: &[LabeledReading]) -> Result<(), SensorDataError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| SensorDataError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for reading in readings {
        writer.serialize(CsvRow::from(reading))?;
    }
    writer.flush().map_err(|source| SensorDataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    debug!("Wrote {} rows to {}", readings.len(), path.display());
    Ok(())
}

/// Read a sensor data file written by [`write_csv`]
pub fn read_csv(path: &Path) -> Result<Vec<LabeledReading>, SensorDataError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut readings = Vec::new();
    for (row, result) in reader.deserialize::<CsvRow>().enumerate() {
        let record = result?;
        let label = Label::try_from(record.label).map_err(|_| SensorDataError::InvalidLabel {
            row,
            value: record.label,
        })?;

        readings.push(LabeledReading {
            reading: SensorReading::new(record.timestamp, record.temperature, record.vibration),
            label,
        });
    }

    debug!("Read {} rows from {}", readings.len(), path.display());
    Ok(readings)
}
