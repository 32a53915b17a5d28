//! Health status levels and threshold scoring.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ui::StatusKind;

/// Success rate (percent) at or above which a run is [`HealthStatus::Good`].
pub const GOOD_THRESHOLD: f64 = 80.0;

/// Success rate (percent) at or above which a run is [`HealthStatus::Fair`].
pub const FAIR_THRESHOLD: f64 = 60.0;

/// Overall verdict for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Every check passed.
    Excellent,
    /// At least 80% passed.
    Good,
    /// At least 60% passed.
    Fair,
    /// Less than 60% passed, or nothing was checked.
    Poor,
}

impl HealthStatus {
    /// Classify a success rate. First match wins:
    /// 100 → Excellent, ≥80 → Good, ≥60 → Fair, else Poor.
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 100.0 {
            Self::Excellent
        } else if rate >= GOOD_THRESHOLD {
            Self::Good
        } else if rate >= FAIR_THRESHOLD {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Whether automation should treat this verdict as green.
    pub fn is_passing(self) -> bool {
        matches!(self, Self::Excellent | Self::Good)
    }

    /// Process exit code for this verdict.
    pub fn exit_code(self) -> i32 {
        if self.is_passing() {
            0
        } else {
            1
        }
    }

    /// Upper-case label used in the report.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        }
    }

    /// Glyph shown before the verdict line.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Excellent => "🎉",
            Self::Good => "✅",
            Self::Fair => "⚠️ ",
            Self::Poor => "❌",
        }
    }

    /// How the verdict line is styled.
    pub fn kind(self) -> StatusKind {
        match self {
            Self::Excellent | Self::Good => StatusKind::Pass,
            Self::Fair => StatusKind::Warning,
            Self::Poor => StatusKind::Fail,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage of passed checks, 0.0 when nothing ran.
pub fn success_rate(passed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    // Multiply before dividing so 8/10 is exactly 80.0.
    (passed.min(total) as f64 * 100.0) / total as f64
}
