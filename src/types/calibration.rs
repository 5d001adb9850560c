//! Calibration state and action scope types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum sample count before an environment leaves learning mode.
pub const LEARNING_SAMPLE_MIN: u64 = 50;

/// Conservative default score for environments that have never been observed.
pub(crate) const DEFAULT_LEARNING_SCORE: f32 = 0.5;

/// Autonomy level permitted for an environment at a given moment.
///
/// Ordered by increasing caution: `Autonomous < Notify < Escalate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionScope {
    /// Act without human approval
    Autonomous,
    /// Act and notify a human
    Notify,
    /// Do not act, ask a human
    Escalate,
}

impl ActionScope {
    /// Whether this scope permits the action to be executed at all.
    pub fn allows_execution(&self) -> bool {
        !matches!(self, Self::Escalate)
    }
}

/// Current calibration state for one environment.
///
/// Records are exclusively owned and mutated by a `CalibrationStore`; every
/// other component reads snapshots by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationState {
    /// Opaque environment identifier (e.g. a cluster name)
    pub environment_id: String,
    /// Calibration score in [0.0, 1.0], higher is more trustworthy
    pub score: f32,
    /// Number of predictions used to compute the score
    pub sample_count: u64,
    /// Timestamp of the last write
    pub last_updated: DateTime<Utc>,
    /// Derived: true whenever `sample_count < LEARNING_SAMPLE_MIN`
    pub is_learning_mode: bool,
    /// Set by the monitor on critical drift, cleared by a fresh profile write
    pub recalibration_needed: bool,
}

impl CalibrationState {
    /// Build a state record, deriving `is_learning_mode` from the sample
    /// count and stamping `last_updated` with the current time.
    ///
    /// The learning-mode flag is never accepted from callers: the derived
    /// computation is authoritative.
    pub fn new(
        environment_id: impl Into<String>,
        score: f32,
        sample_count: u64,
        recalibration_needed: bool,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            score,
            sample_count,
            last_updated: Utc::now(),
            is_learning_mode: sample_count < LEARNING_SAMPLE_MIN,
            recalibration_needed,
        }
    }

    /// Default record for an environment that has never been observed.
    pub fn learning_default(environment_id: impl Into<String>) -> Self {
        Self::new(environment_id, DEFAULT_LEARNING_SCORE, 0, false)
    }
}
