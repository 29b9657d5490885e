//! Human-Readable Verdicts

use sensor_data::Label;

/// Verdict shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    MaintenanceRequired,
    Healthy,
}

/// Wording used by each front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStyle {
    /// `predict` command line tool
    Cli,
    /// Interactive dashboard
    Dashboard,
}

impl Verdict {
    /// Message for the given front end
    pub fn text(self, style: VerdictStyle) -> &'static str {
        match (self, style) {
            (Verdict::MaintenanceRequired, VerdictStyle::Cli) => "⚠ Maintenance Required!",
            (Verdict::MaintenanceRequired, VerdictStyle::Dashboard) => "⚠ Maintenance Needed!",
            (Verdict::Healthy, _) => "✅ Machine Healthy",
        }
    }

    pub fn needs_maintenance(self) -> bool {
        self == Verdict::MaintenanceRequired
    }
}

impl From<Label> for Verdict {
    fn from(label: Label) -> Self {
        match label {
            Label::MaintenanceNeeded => Verdict::MaintenanceRequired,
            Label::Healthy => Verdict::Healthy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_text() {
        assert_eq!(
            Verdict::from(Label::MaintenanceNeeded).text(VerdictStyle::Cli),
            "⚠ Maintenance Required!"
        );
        assert_eq!(
            Verdict::from(Label::Healthy).text(VerdictStyle::Cli),
            "✅ Machine Healthy"
        );
    }

    #[test]
    fn test_dashboard_text() {
        assert_eq!(
            Verdict::MaintenanceRequired.text(VerdictStyle::Dashboard),
            "⚠ Maintenance Needed!"
        );
        assert_eq!(
            Verdict::Healthy.text(VerdictStyle::Dashboard),
            "✅ Machine Healthy"
        );
    }
}
