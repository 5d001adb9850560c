//! Drift classification types.

use serde::{Deserialize, Serialize};

/// Severity of calibration drift relative to the baseline ECE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftSeverity {
    /// Within normal variation of the baseline
    None,
    /// Noticeable deviation, watch closely
    Moderate,
    /// Large deviation, autonomy should be reduced
    Significant,
    /// Extreme deviation, the model must be recalibrated
    Critical,
}

/// Systemic response recommended for a drift classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftAction {
    /// Keep operating normally
    Continue,
    /// Keep operating but watch the metric
    Monitor,
    /// Scale back autonomous actions
    ReduceAutonomy,
    /// Flag the environment for model recalibration
    TriggerRecalibration,
}

/// Result of checking calibration drift. Computed, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftStatus {
    /// How far calibration has deviated
    pub severity: DriftSeverity,
    /// Recommended systemic response
    pub action: DriftAction,
    /// `current_ece / baseline_ece`, always >= 0
    pub drift_ratio: f32,
    /// Human-readable summary
    pub message: String,
}

impl DriftStatus {
    /// Whether this status demands a recalibration of the model.
    pub fn requires_recalibration(&self) -> bool {
        self.action == DriftAction::TriggerRecalibration
    }
}
