//! Calibration drift detection.
//!
//! Classifies how far the current expected calibration error (ECE) has moved
//! from a historical baseline, and recommends a systemic response. Informed
//! by research showing up to 22x calibration degradation across schedulers.

use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};
use crate::types::{DriftAction, DriftSeverity, DriftStatus};

/// Default baseline ECE used when no positive baseline is supplied.
pub const DEFAULT_BASELINE_ECE: f32 = 0.018;

/// Drift classification bounds.
///
/// Ratios are inclusive upper bounds, checked ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftConfig {
    /// Baseline ECE the current error is compared against (global for now)
    pub baseline_ece: f32,
    /// Ratios at or below this are normal variation
    pub moderate_ratio: f32,
    /// Ratios at or below this warrant monitoring
    pub significant_ratio: f32,
    /// Ratios at or below this reduce autonomy; above is critical
    pub critical_ratio: f32,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            baseline_ece: DEFAULT_BASELINE_ECE,
            moderate_ratio: 1.5,
            significant_ratio: 2.0,
            critical_ratio: 5.0,
        }
    }
}

impl DriftConfig {
    /// Validate baseline positivity and ratio ordering.
    pub fn validate(&self) -> GateResult<()> {
        if self.baseline_ece <= 0.0 || self.baseline_ece.is_nan() {
            return Err(GateError::ConfigError(format!(
                "baseline_ece must be positive, got {}",
                self.baseline_ece
            )));
        }
        if !(self.moderate_ratio < self.significant_ratio
            && self.significant_ratio < self.critical_ratio)
        {
            return Err(GateError::ConfigError(format!(
                "drift ratios must be strictly ascending: {} / {} / {}",
                self.moderate_ratio, self.significant_ratio, self.critical_ratio
            )));
        }
        Ok(())
    }
}

/// Detect whether calibration has drifted from the baseline.
///
/// A non-positive `baseline_ece` argument is replaced with the default
/// baseline so the ratio is never computed against zero.
pub fn detect_drift(current_ece: f32, baseline_ece: f32, config: &DriftConfig) -> DriftStatus {
    let baseline = if baseline_ece <= 0.0 {
        DEFAULT_BASELINE_ECE
    } else {
        baseline_ece
    };

    let drift_ratio = current_ece / baseline;

    if drift_ratio <= config.moderate_ratio {
        return DriftStatus {
            severity: DriftSeverity::None,
            action: DriftAction::Continue,
            drift_ratio,
            message: "Calibration stable".to_string(),
        };
    }

    if drift_ratio <= config.significant_ratio {
        return DriftStatus {
            severity: DriftSeverity::Moderate,
            action: DriftAction::Monitor,
            drift_ratio,
            message: format!("ECE increased {:.1}x from baseline", drift_ratio),
        };
    }

    if drift_ratio <= config.critical_ratio {
        return DriftStatus {
            severity: DriftSeverity::Significant,
            action: DriftAction::ReduceAutonomy,
            drift_ratio,
            message: format!(
                "ECE increased {:.1}x, reducing autonomous actions",
                drift_ratio
            ),
        };
    }

    DriftStatus {
        severity: DriftSeverity::Critical,
        action: DriftAction::TriggerRecalibration,
        drift_ratio,
        message: format!("ECE increased {:.1}x, recalibration required", drift_ratio),
    }
}
