//! Predictive Maintenance Dashboard
//!
//! Two sliders (temperature, vibration) feeding a loaded classifier; the
//! verdict is recomputed synchronously after every change.

pub mod app;
pub mod event;
pub mod slider;
pub mod ui;

pub use app::{on_input_change, App, SliderId};
pub use slider::Slider;
