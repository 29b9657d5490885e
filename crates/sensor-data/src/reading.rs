//! Sensor Readings and Labels

use serde::{Deserialize, Serialize};

/// Temperature above which a machine needs maintenance
pub const TEMPERATURE_THRESHOLD: f64 = 100.0;

/// Vibration above which a machine needs maintenance
pub const VIBRATION_THRESHOLD: f64 = 1.5;

/// Binary maintenance label, stored as 0/1 on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    /// Machine healthy (0)
    Healthy,
    /// Maintenance needed (1)
    MaintenanceNeeded,
}

impl Label {
    /// Integer encoding used in data files
    pub fn as_u8(self) -> u8 {
        match self {
            Label::Healthy => 0,
            Label::MaintenanceNeeded => 1,
        }
    }

    /// Whether this label asks for maintenance
    pub fn needs_maintenance(self) -> bool {
        self == Label::MaintenanceNeeded
    }

    /// Get string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Healthy => "healthy",
            Label::MaintenanceNeeded => "maintenance_needed",
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.as_u8()
    }
}

impl TryFrom<u8> for Label {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Healthy),
            1 => Ok(Label::MaintenanceNeeded),
            other => Err(format!("invalid label {other}, expected 0 or 1")),
        }
    }
}

impl From<bool> for Label {
    fn from(needs_maintenance: bool) -> Self {
        if needs_maintenance {
            Label::MaintenanceNeeded
        } else {
            Label::Healthy
        }
    }
}

/// Label a (temperature, vibration) pair with the maintenance rule.
///
/// Both comparisons are strict, so readings sitting exactly on a threshold
/// are healthy.
pub fn label_for(temperature: f64, vibration: f64) -> Label {
    Label::from(temperature > TEMPERATURE_THRESHOLD || vibration > VIBRATION_THRESHOLD)
}

/// A single sensor reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Row index (0-based)
    pub timestamp: u64,
    /// Temperature
    pub temperature: f64,
    /// Vibration amplitude
    pub vibration: f64,
}

impl SensorReading {
    pub fn new(timestamp: u64, temperature: f64, vibration: f64) -> Self {
        Self {
            timestamp,
            temperature,
            vibration,
        }
    }

    /// Label this reading with the maintenance rule
    pub fn label(&self) -> Label {
        label_for(self.temperature, self.vibration)
    }

    /// Attach the rule-derived label
    pub fn labeled(self) -> LabeledReading {
        LabeledReading {
            label: self.label(),
            reading: self,
        }
    }
}

/// Sensor reading paired with its label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledReading {
    pub reading: SensorReading,
    pub label: Label,
}
