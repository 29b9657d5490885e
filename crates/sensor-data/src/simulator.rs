//! Synthetic Sensor Data Generator

use crate::dataset::write_csv;
use crate::reading::{LabeledReading, SensorReading};
use crate::SensorDataError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::{debug, info};

/// Number of readings in a simulated data set
pub const SAMPLE_COUNT: usize = 1000;

/// Simulated temperature range (inclusive)
pub const SIMULATED_TEMPERATURE_RANGE: (f64, f64) = (60.0, 120.0);

/// Simulated vibration range (inclusive)
pub const SIMULATED_VIBRATION_RANGE: (f64, f64) = (0.1, 2.0);

/// Outcome of writing a simulated data set
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    /// Data rows written (header excluded)
    pub rows: usize,
    /// Rows labeled as needing maintenance
    pub maintenance_rows: usize,
}

impl DatasetSummary {
    fn from_readings(readings: &[LabeledReading]) -> Self {
        Self {
            rows: readings.len(),
            maintenance_rows: readings
                .iter()
                .filter(|r| r.label.needs_maintenance())
                .count(),
        }
    }

    /// Share of rows labeled as needing maintenance (0.0 to 1.0)
    pub fn maintenance_ratio(&self) -> f64 {
        if self.rows == 0 {
            return 0.0;
        }
        self.maintenance_rows as f64 / self.rows as f64
    }
}

/// Draw `count` independent readings with timestamps `0..count`.
///
/// Temperature and vibration are uniform over the simulated ranges; each
/// reading is labeled with the maintenance rule.
pub fn simulate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<LabeledReading> {
    let (t_min, t_max) = SIMULATED_TEMPERATURE_RANGE;
    let (v_min, v_max) = SIMULATED_VIBRATION_RANGE;

    (0..count)
        .map(|i| {
            let temperature = rng.gen_range(t_min..=t_max);
            let vibration = rng.gen_range(v_min..=v_max);
            SensorReading::new(i as u64, temperature, vibration).labeled()
        })
        .collect()
}

/// Simulate `count` readings and write them to `path`, replacing any
/// existing file.
///
/// With `seed` set the output is reproducible; otherwise the generator is
/// seeded from OS entropy.
pub fn generate_dataset(
    path: &Path,
    count: usize,
    seed: Option<u64>,
) -> Result<DatasetSummary, SensorDataError> {
    let mut rng = match seed {
        Some(seed) => {
            debug!("Seeding simulator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let readings = simulate(count, &mut rng);
    write_csv(path, &readings)?;

    let summary = DatasetSummary::from_readings(&readings);
    info!(
        "Simulated {} readings ({} need maintenance) -> {}",
        summary.rows,
        summary.maintenance_rows,
        path.display()
    );
    Ok(summary)
}
