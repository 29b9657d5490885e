//! Maintenance Command Line Tools
//!
//! Entry points behind the `simulate-data`, `train-model` and `predict`
//! binaries. Each one reads its paths from [`AppConfig`] and fails fast.

use anyhow::{Context, Result};
use inference_engine::{
    evaluate, Classifier, DecisionTreeClassifier, Evaluation, FeatureVector, InferenceEngine,
    ModelArtifact, RuleClassifier, TrainConfig, VerdictStyle,
};
use runtime::AppConfig;
use sensor_data::{generate_dataset, read_csv, DatasetSummary, SAMPLE_COUNT};
use tracing::{info, warn};

/// Reading the `predict` tool classifies
pub const EXAMPLE_FEATURES: FeatureVector = FeatureVector {
    temperature: 110.0,
    vibration: 1.6,
};

/// Write a fresh simulated data set to `config.data_path`
pub fn simulate(config: &AppConfig) -> Result<DatasetSummary> {
    let summary = generate_dataset(&config.data_path, SAMPLE_COUNT, config.seed)
        .with_context(|| format!("writing sensor data to {}", config.data_path.display()))?;

    info!(
        "{:.1}% of simulated readings need maintenance",
        summary.maintenance_ratio() * 100.0
    );
    Ok(summary)
}

/// Fit a tree to `config.data_path` and save it to `config.model_path`
pub fn train(config: &AppConfig) -> Result<Evaluation> {
    let readings = read_csv(&config.data_path)
        .with_context(|| format!("reading sensor data from {}", config.data_path.display()))?;
    info!("Training on {} readings", readings.len());

    let train_config = TrainConfig {
        max_depth: config.max_depth,
        min_samples_split: config.min_samples_split,
    };
    let tree = DecisionTreeClassifier::fit(&readings, &train_config)?;

    let evaluation = evaluate(&tree, &readings)?;
    info!(
        "Training accuracy {:.2}% ({}/{}), fp={}, fn={}",
        evaluation.accuracy * 100.0,
        evaluation.correct,
        evaluation.total,
        evaluation.false_positives,
        evaluation.false_negatives
    );

    // Sanity check against the rule that produced the labels
    let example_tree = tree.predict(&EXAMPLE_FEATURES)?;
    let example_rule = RuleClassifier.predict(&EXAMPLE_FEATURES)?;
    if example_tree != example_rule {
        warn!(
            "Trained model disagrees with labeling rule on example reading: {} vs {}",
            example_tree.as_str(),
            example_rule.as_str()
        );
    }

    ModelArtifact::new(tree)
        .save(&config.model_path)
        .with_context(|| format!("saving model to {}", config.model_path.display()))?;
    Ok(evaluation)
}

/// Classify [`EXAMPLE_FEATURES`] with the model at `config.model_path`
pub fn predict(config: &AppConfig) -> Result<&'static str> {
    let engine = InferenceEngine::load(&config.model_path)
        .with_context(|| format!("loading model from {}", config.model_path.display()))?;

    let result = engine.predict(&EXAMPLE_FEATURES)?;
    Ok(result.verdict.text(VerdictStyle::Cli))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config_in(dir: &Path) -> AppConfig {
        AppConfig {
            data_path: dir.join("data").join("sensor_data.csv"),
            model_path: dir.join("models").join("maintenance_model.json"),
            seed: Some(2024),
            ..Default::default()
        }
    }

    #[test]
    fn test_simulate_writes_fixed_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let summary = simulate(&config).unwrap();
        assert_eq!(summary.rows, 1000);
        assert!(config.data_path.exists());
    }

    #[test]
    fn test_train_then_predict() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        simulate(&config).unwrap();
        let evaluation = train(&config).unwrap();
        assert!(evaluation.accuracy >= 0.95);

        assert_eq!(predict(&config).unwrap(), "⚠ Maintenance Required!");
    }

    #[test]
    fn test_predict_without_model_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = predict(&config_in(dir.path())).unwrap_err();
        assert!(err.to_string().contains("loading model"));
    }

    #[test]
    fn test_train_without_data_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(train(&config_in(dir.path())).is_err());
    }
}
