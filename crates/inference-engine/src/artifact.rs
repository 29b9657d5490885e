//! Classifier Artifact
//!
//! JSON file holding a trained tree plus the feature schema it was trained on.

use crate::features::FEATURE_NAMES;
use crate::tree::DecisionTreeClassifier;
use crate::InferenceError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Artifact layout version written by this crate
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Serialized classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    /// Input columns, in order
    pub feature_names: Vec<String>,
    pub classifier: DecisionTreeClassifier,
}

impl ModelArtifact {
    /// Package a trained tree with the current feature schema
    pub fn new(classifier: DecisionTreeClassifier) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            classifier,
        }
    }

    /// Write the artifact as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), InferenceError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                InferenceError::ModelSaveError(format!("{}: {}", parent.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| InferenceError::ModelSaveError(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| InferenceError::ModelSaveError(format!("{}: {}", path.display(), e)))?;

        info!("Saved model artifact to {}", path.display());
        Ok(())
    }

    /// Read and check an artifact
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let json = fs::read_to_string(path)
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;

        let artifact: Self = serde_json::from_str(&json)
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;
        artifact.check()?;

        info!(
            "Loaded model artifact from {} (depth={}, leaves={})",
            path.display(),
            artifact.classifier.depth(),
            artifact.classifier.leaf_count()
        );
        Ok(artifact)
    }

    fn check(&self) -> Result<(), InferenceError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(InferenceError::UnsupportedFormat(self.format_version));
        }

        if self.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(InferenceError::InvalidInputShape {
                expected: format!("{:?}", FEATURE_NAMES),
                actual: format!("{:?}", self.feature_names),
            });
        }

        self.classifier.validate()
    }

    pub fn into_classifier(self) -> DecisionTreeClassifier {
        self.classifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Node, TrainConfig};
    use sensor_data::{Label, SensorReading};

    fn small_tree() -> DecisionTreeClassifier {
        let data = vec![
            SensorReading::new(0, 70.0, 0.5).labeled(),
            SensorReading::new(1, 110.0, 0.5).labeled(),
        ];
        DecisionTreeClassifier::fit(&data, &TrainConfig::default()).unwrap()
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models").join("maintenance_model.json");
        let artifact = ModelArtifact::new(small_tree());

        artifact.save(&path).unwrap();
        let loaded = ModelArtifact::load(&path).unwrap();

        assert_eq!(loaded, artifact);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelArtifact::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, InferenceError::ModelLoadError(_)));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "not json").unwrap();

        let err = ModelArtifact::load(&path).unwrap_err();
        assert!(matches!(err, InferenceError::ModelLoadError(_)));
    }

    #[test]
    fn test_foreign_feature_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut artifact = ModelArtifact::new(small_tree());
        artifact.feature_names = vec!["vibration".into(), "temperature".into()];
        artifact.save(&path).unwrap();

        let err = ModelArtifact::load(&path).unwrap_err();
        assert!(matches!(err, InferenceError::InvalidInputShape { .. }));
    }

    #[test]
    fn test_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut artifact = ModelArtifact::new(small_tree());
        artifact.format_version = 99;
        artifact.save(&path).unwrap();

        let err = ModelArtifact::load(&path).unwrap_err();
        assert!(matches!(err, InferenceError::UnsupportedFormat(99)));
    }

    #[test]
    fn test_hand_written_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(
            &path,
            r#"{
                "format_version": 1,
                "feature_names": ["temperature", "vibration"],
                "classifier": {
                    "root": {
                        "type": "split", "feature": 1, "threshold": 1.5,
                        "left": {"type": "leaf", "label": 0, "samples": 10},
                        "right": {"type": "leaf", "label": 1, "samples": 4}
                    }
                }
            }"#,
        )
        .unwrap();

        let tree = ModelArtifact::load(&path).unwrap().into_classifier();
        match tree.root() {
            Node::Split { right, .. } => assert_eq!(
                **right,
                Node::Leaf {
                    label: Label::MaintenanceNeeded,
                    samples: 4
                }
            ),
            other => panic!("expected split, got {:?}", other),
        }
    }
}
