//! Classifier Capability

use crate::features::FeatureVector;
use crate::InferenceError;
use sensor_data::{label_for, Label};

/// Anything that maps a feature vector to a maintenance label
pub trait Classifier {
    /// Predict the label for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<Label, InferenceError>;

    /// Predict labels for a batch, in input order
    fn predict_batch(&self, batch: &[FeatureVector]) -> Result<Vec<Label>, InferenceError> {
        batch.iter().map(|f| self.predict(f)).collect()
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn predict(&self, features: &FeatureVector) -> Result<Label, InferenceError> {
        (**self).predict(features)
    }
}

/// Reject inputs no model can reason about
pub(crate) fn check_finite(features: &FeatureVector) -> Result<(), InferenceError> {
    if features.is_finite() {
        Ok(())
    } else {
        Err(InferenceError::InvalidInput(format!(
            "non-finite features: temperature={}, vibration={}",
            features.temperature, features.vibration
        )))
    }
}

/// Classifier that applies the data labeling rule directly.
///
/// Serves as a stand-in when no trained model is available and as the
/// reference a trained model is evaluated against.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl Classifier for RuleClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Label, InferenceError> {
        check_finite(features)?;
        Ok(label_for(features.temperature, features.vibration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_classifier() {
        let rule = RuleClassifier;
        assert_eq!(
            rule.predict(&FeatureVector::new(110.0, 1.6)).unwrap(),
            Label::MaintenanceNeeded
        );
        assert_eq!(
            rule.predict(&FeatureVector::new(90.0, 1.0)).unwrap(),
            Label::Healthy
        );
    }

    #[test]
    fn test_batch_keeps_order() {
        let batch = [
            FeatureVector::new(70.0, 0.2),
            FeatureVector::new(70.0, 1.9),
            FeatureVector::new(115.0, 0.2),
        ];
        let labels = RuleClassifier.predict_batch(&batch).unwrap();
        assert_eq!(
            labels,
            vec![Label::Healthy, Label::MaintenanceNeeded, Label::MaintenanceNeeded]
        );
    }

    #[test]
    fn test_rejects_nan() {
        let err = RuleClassifier
            .predict(&FeatureVector::new(f64::NAN, 1.0))
            .unwrap_err();
        assert!(matches!(err, InferenceError::InvalidInput(_)));
    }

    #[test]
    fn test_boxed_classifier() {
        let boxed: Box<dyn Classifier> = Box::new(RuleClassifier);
        assert_eq!(
            boxed.predict(&FeatureVector::new(101.0, 0.5)).unwrap(),
            Label::MaintenanceNeeded
        );
    }
}
