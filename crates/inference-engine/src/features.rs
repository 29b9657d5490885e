//! Feature Vector

use sensor_data::SensorReading;

/// Number of model inputs
pub const FEATURE_DIMENSION: usize = 2;

/// Model input column names, in order
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = ["temperature", "vibration"];

/// Feature vector for ML inference
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeatureVector {
    pub temperature: f64,
    pub vibration: f64,
}

impl FeatureVector {
    pub fn new(temperature: f64, vibration: f64) -> Self {
        Self {
            temperature,
            vibration,
        }
    }

    /// Values in [`FEATURE_NAMES`] order
    pub fn as_array(&self) -> [f64; FEATURE_DIMENSION] {
        [self.temperature, self.vibration]
    }

    /// Whether every value is a finite number
    pub fn is_finite(&self) -> bool {
        self.temperature.is_finite() && self.vibration.is_finite()
    }
}

impl From<[f64; FEATURE_DIMENSION]> for FeatureVector {
    fn from([temperature, vibration]: [f64; FEATURE_DIMENSION]) -> Self {
        Self::new(temperature, vibration)
    }
}

impl From<&SensorReading> for FeatureVector {
    fn from(reading: &SensorReading) -> Self {
        Self::new(reading.temperature, reading.vibration)
    }
}
