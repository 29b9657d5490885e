//! Inference Engine Implementation

use crate::artifact::ModelArtifact;
use crate::classifier::{Classifier, RuleClassifier};
use crate::features::FeatureVector;
use crate::verdict::{Verdict, VerdictStyle};
use crate::InferenceError;
use sensor_data::Label;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Result of inference operation
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceResult {
    /// Predicted label
    pub label: Label,
    /// Verdict derived from the label
    pub verdict: Verdict,
    /// Inference latency in microseconds
    pub latency_us: u64,
}

/// A loaded classifier plus where it came from
pub struct InferenceEngine {
    /// Model path (or a description for in-memory classifiers)
    model_path: String,
    classifier: Box<dyn Classifier>,
}

impl InferenceEngine {
    /// Load the classifier artifact at `path`
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        info!("Creating inference engine with model: {}", path.display());
        let classifier = ModelArtifact::load(path)?.into_classifier();

        Ok(Self {
            model_path: path.display().to_string(),
            classifier: Box::new(classifier),
        })
    }

    /// Wrap an in-memory classifier
    pub fn with_classifier(name: &str, classifier: impl Classifier + 'static) -> Self {
        info!("Creating inference engine with in-memory classifier: {}", name);
        Self {
            model_path: name.to_string(),
            classifier: Box::new(classifier),
        }
    }

    /// Engine backed by the labeling rule, for testing
    pub fn mock() -> Self {
        Self::with_classifier("mock", RuleClassifier)
    }

    /// Run inference on a feature vector
    pub fn predict(&self, features: &FeatureVector) -> Result<InferenceResult, InferenceError> {
        let start = Instant::now();
        let label = self.classifier.predict(features)?;
        let latency_us = start.elapsed().as_micros() as u64;

        debug!(
            "Prediction for temperature={}, vibration={}: {} ({}us)",
            features.temperature,
            features.vibration,
            label.as_str(),
            latency_us
        );

        Ok(InferenceResult {
            label,
            verdict: Verdict::from(label),
            latency_us,
        })
    }

    /// Predict and render the verdict for one front end
    pub fn verdict_text(
        &self,
        temperature: f64,
        vibration: f64,
        style: VerdictStyle,
    ) -> Result<&'static str, InferenceError> {
        let result = self.predict(&FeatureVector::new(temperature, vibration))?;
        Ok(result.verdict.text(style))
    }

    /// Get model path
    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}
