//! Status vocabulary for styled output.

use console::Style;

use super::theme::HealthTheme;

/// Outcome class of a printed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// A passing check or a healthy verdict.
    Pass,
    /// A failing check or a poor verdict.
    Fail,
    /// A borderline verdict.
    Warning,
}

impl StatusKind {
    /// The theme style for this kind.
    pub fn style(self, theme: &HealthTheme) -> &Style {
        match self {
            Self::Pass => &theme.success,
            Self::Fail => &theme.error,
            Self::Warning => &theme.warning,
        }
    }

    /// Apply this kind's style to a whole line.
    pub fn format(self, theme: &HealthTheme, line: &str) -> String {
        self.style(theme).apply_to(line).to_string()
    }
}
