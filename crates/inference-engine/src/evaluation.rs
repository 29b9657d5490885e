//! Classifier Evaluation

use crate::classifier::Classifier;
use crate::features::FeatureVector;
use crate::InferenceError;
use sensor_data::{Label, LabeledReading};

/// Confusion counts of a classifier over labeled readings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub total: usize,
    pub correct: usize,
    /// Fraction correct (0.0 to 1.0, 0.0 for an empty set)
    pub accuracy: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

/// Score `classifier` against the labels carried by `readings`
pub fn evaluate<C: Classifier + ?Sized>(
    classifier: &C,
    readings: &[LabeledReading],
) -> Result<Evaluation, InferenceError> {
    let mut eval = Evaluation {
        total: readings.len(),
        ..Default::default()
    };

    for r in readings {
        let predicted = classifier.predict(&FeatureVector::from(&r.reading))?;
        match (predicted, r.label) {
            (Label::MaintenanceNeeded, Label::MaintenanceNeeded) => eval.true_positives += 1,
            (Label::MaintenanceNeeded, Label::Healthy) => eval.false_positives += 1,
            (Label::Healthy, Label::Healthy) => eval.true_negatives += 1,
            (Label::Healthy, Label::MaintenanceNeeded) => eval.false_negatives += 1,
        }
    }

    eval.correct = eval.true_positives + eval.true_negatives;
    if eval.total > 0 {
        eval.accuracy = eval.correct as f64 / eval.total as f64;
    }
    Ok(eval)
}
