//! Application state for the dashboard.

use inference_engine::{FeatureVector, InferenceEngine, Verdict, VerdictStyle};
use tracing::{debug, warn};

use crate::slider::Slider;

/// Which slider keyboard input applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderId {
    #[default]
    Temperature,
    Vibration,
}

impl SliderId {
    pub fn toggle(self) -> Self {
        match self {
            SliderId::Temperature => SliderId::Vibration,
            SliderId::Vibration => SliderId::Temperature,
        }
    }
}

/// Verdict text for the current slider values. Pure in the classifier and
/// the two inputs.
///
/// A failed prediction yields the error text instead of a verdict.
pub fn on_input_change(engine: &InferenceEngine, temperature: f64, vibration: f64) -> String {
    match engine.predict(&FeatureVector::new(temperature, vibration)) {
        Ok(result) => result.verdict.text(VerdictStyle::Dashboard).to_string(),
        Err(e) => format!("Prediction failed: {e}"),
    }
}

/// Which verdict a callback text names, `None` for an error text
fn verdict_of(text: &str) -> Option<Verdict> {
    [Verdict::MaintenanceRequired, Verdict::Healthy]
        .into_iter()
        .find(|v| v.text(VerdictStyle::Dashboard) == text)
}

/// Main application state.
pub struct App {
    engine: InferenceEngine,
    pub temperature: Slider,
    pub vibration: Slider,
    pub selected: SliderId,
    /// Latest `on_input_change` output, recomputed after every slider change
    verdict_text: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(engine: InferenceEngine) -> Self {
        let mut app = Self {
            engine,
            temperature: Slider::temperature(),
            vibration: Slider::vibration(),
            selected: SliderId::default(),
            verdict_text: String::new(),
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Rerun the classifier on the current inputs.
    fn refresh(&mut self) {
        let (t, v) = self.inputs();
        self.verdict_text = on_input_change(&self.engine, t, v);

        match verdict_of(&self.verdict_text) {
            Some(verdict) => debug!("temperature={} vibration={} -> {:?}", t, v, verdict),
            None => warn!("temperature={} vibration={}: {}", t, v, self.verdict_text),
        }
    }

    /// Current (temperature, vibration) as model inputs
    pub fn inputs(&self) -> (f64, f64) {
        (
            self.temperature.value() as f64,
            self.vibration.value() as f64,
        )
    }

    pub fn verdict_text(&self) -> &str {
        &self.verdict_text
    }

    /// `Some(true)` when maintenance is needed, `None` if prediction failed
    pub fn needs_maintenance(&self) -> Option<bool> {
        verdict_of(&self.verdict_text).map(Verdict::needs_maintenance)
    }

    pub fn model_path(&self) -> &str {
        self.engine.model_path()
    }

    fn selected_slider(&mut self) -> &mut Slider {
        match self.selected {
            SliderId::Temperature => &mut self.temperature,
            SliderId::Vibration => &mut self.vibration,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.toggle();
    }

    /// Move the selected slider by `steps`.
    pub fn adjust(&mut self, steps: i64) {
        if self.selected_slider().step_by(steps) {
            self.refresh();
        }
    }

    pub fn selected_to_min(&mut self) {
        if self.selected_slider().to_min() {
            self.refresh();
        }
    }

    pub fn selected_to_max(&mut self) {
        if self.selected_slider().to_max() {
            self.refresh();
        }
    }

    pub fn set_temperature(&mut self, value: i64) {
        if self.temperature.set(value) {
            self.refresh();
        }
    }

    pub fn set_vibration(&mut self, value: i64) {
        if self.vibration.set(value) {
            self.refresh();
        }
    }

    /// Put both sliders back to their defaults.
    pub fn reset(&mut self) {
        let t = self.temperature.reset();
        let v = self.vibration.reset();
        if t || v {
            self.refresh();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inference_engine::{Classifier, DecisionTreeClassifier, InferenceError, Label, Node};

    struct Broken;

    impl Classifier for Broken {
        fn predict(&self, _: &FeatureVector) -> Result<Label, InferenceError> {
            Err(InferenceError::InvalidInput("broken".into()))
        }
    }

    fn vibration_only_tree() -> DecisionTreeClassifier {
        DecisionTreeClassifier::from_root(Node::Split {
            feature: 1,
            threshold: 1.5,
            left: Box::new(Node::Leaf {
                label: Label::Healthy,
                samples: 1,
            }),
            right: Box::new(Node::Leaf {
                label: Label::MaintenanceNeeded,
                samples: 1,
            }),
        })
    }

    #[test]
    fn test_defaults_predict_on_90_1() {
        let app = App::new(InferenceEngine::mock());
        assert_eq!(app.inputs(), (90.0, 1.0));
        assert_eq!(app.verdict_text(), "✅ Machine Healthy");
        assert_eq!(app.needs_maintenance(), Some(false));
    }

    #[test]
    fn test_defaults_follow_the_classifier() {
        // Flags (90, 1), which the labeling rule calls healthy
        let tree = DecisionTreeClassifier::from_root(Node::Split {
            feature: 0,
            threshold: 85.0,
            left: Box::new(Node::Leaf {
                label: Label::Healthy,
                samples: 1,
            }),
            right: Box::new(Node::Leaf {
                label: Label::MaintenanceNeeded,
                samples: 1,
            }),
        });
        let app = App::new(InferenceEngine::with_classifier("tree", tree));

        assert_eq!(app.inputs(), (90.0, 1.0));
        assert_eq!(app.verdict_text(), "⚠ Maintenance Needed!");
        assert_eq!(app.needs_maintenance(), Some(true));
    }

    #[test]
    fn test_stored_text_is_callback_output() {
        let engine = InferenceEngine::with_classifier("tree", vibration_only_tree());
        let mut app = App::new(InferenceEngine::with_classifier("tree", vibration_only_tree()));

        for (t, v) in [(140, 1), (60, 2), (120, 0)] {
            app.set_temperature(t);
            app.set_vibration(v);
            assert_eq!(
                app.verdict_text(),
                on_input_change(&engine, t as f64, v as f64)
            );
        }
    }

    #[test]
    fn test_verdict_recomputed_on_change() {
        let mut app = App::new(InferenceEngine::mock());

        app.set_temperature(120);
        assert_eq!(app.verdict_text(), "⚠ Maintenance Needed!");

        app.reset();
        assert_eq!(app.verdict_text(), "✅ Machine Healthy");

        app.select_next();
        app.adjust(1);
        assert_eq!(app.vibration.value(), 2);
        assert_eq!(app.verdict_text(), "⚠ Maintenance Needed!");
    }

    #[test]
    fn test_inputs_clamped() {
        let mut app = App::new(InferenceEngine::mock());
        app.set_temperature(1000);
        app.set_vibration(-4);
        assert_eq!(app.inputs(), (150.0, 0.0));

        app.selected = SliderId::Vibration;
        app.selected_to_max();
        assert_eq!(app.vibration.value(), 3);
    }

    #[test]
    fn test_on_input_change_is_pure() {
        let engine = InferenceEngine::with_classifier("tree", vibration_only_tree());
        let first = on_input_change(&engine, 140.0, 1.0);
        let second = on_input_change(&engine, 140.0, 1.0);
        assert_eq!(first, second);
        assert_eq!(first, "✅ Machine Healthy");
        assert_eq!(on_input_change(&engine, 60.0, 2.0), "⚠ Maintenance Needed!");
    }

    #[test]
    fn test_matches_cli_classification() {
        let engine = InferenceEngine::with_classifier("tree", vibration_only_tree());
        for (t, v) in [(110.0, 1.6), (90.0, 1.0), (50.0, 3.0)] {
            let cli = engine.verdict_text(t, v, VerdictStyle::Cli).unwrap();
            let dash = on_input_change(&engine, t, v);
            assert_eq!(cli.starts_with('⚠'), dash.starts_with('⚠'));
        }
    }

    #[test]
    fn test_prediction_error_shown() {
        let app = App::new(InferenceEngine::with_classifier("broken", Broken));
        assert!(app.verdict_text().starts_with("Prediction failed"));
        assert_eq!(app.needs_maintenance(), None);
    }
}
