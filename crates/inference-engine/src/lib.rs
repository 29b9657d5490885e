//! Maintenance Inference Engine
//!
//! Loads a trained maintenance classifier and maps (temperature, vibration)
//! readings to a label and a human-readable verdict.

mod artifact;
mod classifier;
mod engine;
mod evaluation;
mod features;
mod tree;
mod verdict;

pub use artifact::{ModelArtifact, ARTIFACT_FORMAT_VERSION};
pub use classifier::{Classifier, RuleClassifier};
pub use engine::{InferenceEngine, InferenceResult};
pub use evaluation::{evaluate, Evaluation};
pub use features::{FeatureVector, FEATURE_DIMENSION, FEATURE_NAMES};
pub use tree::{DecisionTreeClassifier, Node, TrainConfig};
pub use verdict::{Verdict, VerdictStyle};

pub use sensor_data::Label;

use thiserror::Error;

/// Errors during training, loading, or inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Model save failed: {0}")]
    ModelSaveError(String),
    #[error("Unsupported model format version {0}")]
    UnsupportedFormat(u32),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: String, actual: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Cannot train on an empty data set")]
    EmptyTrainingSet,
}
