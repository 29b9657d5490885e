//! Bounded integer slider.

/// Integer range input. The value always lies in `[min, max]` on the step
/// grid anchored at `min`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    label: &'static str,
    min: i64,
    max: i64,
    step: i64,
    default: i64,
    value: i64,
}

impl Slider {
    /// Create a slider; `default` is clamped like any other input.
    pub fn new(label: &'static str, min: i64, max: i64, default: i64, step: i64) -> Self {
        assert!(min <= max, "slider min must not exceed max");
        assert!(step > 0, "slider step must be positive");

        let mut slider = Self {
            label,
            min,
            max,
            step,
            default: min,
            value: min,
        };
        slider.set(default);
        slider.default = slider.value;
        slider
    }

    /// Temperature input: [50, 150], default 90
    pub fn temperature() -> Self {
        Self::new("Temperature", 50, 150, 90, 1)
    }

    /// Vibration input: [0, 3], default 1
    pub fn vibration() -> Self {
        Self::new("Vibration", 0, 3, 1, 1)
    }

    /// Set the value, clamping to the bounds and snapping down to the step grid.
    /// Returns whether the value changed.
    pub fn set(&mut self, value: i64) -> bool {
        let clamped = value.clamp(self.min, self.max);
        let snapped = self.min + (clamped - self.min) / self.step * self.step;
        let changed = snapped != self.value;
        self.value = snapped;
        changed
    }

    /// Move by `steps` steps (negative moves down)
    pub fn step_by(&mut self, steps: i64) -> bool {
        self.set(self.value.saturating_add(steps.saturating_mul(self.step)))
    }

    pub fn to_min(&mut self) -> bool {
        self.set(self.min)
    }

    pub fn to_max(&mut self) -> bool {
        self.set(self.max)
    }

    pub fn reset(&mut self) -> bool {
        self.set(self.default)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    /// Position within the bounds (0.0 to 1.0)
    pub fn ratio(&self) -> f64 {
        if self.max == self.min {
            return 1.0;
        }
        (self.value - self.min) as f64 / (self.max - self.min) as f64
    }
}
