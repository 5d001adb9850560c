//! Action scope resolution.
//!
//! The decision kernel of the gating system: maps a calibration snapshot to
//! the autonomy level an agent is permitted for that environment. Pure,
//! deterministic and total; no I/O, no clock, no failure path.

use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};
use crate::types::{ActionScope, CalibrationState, LEARNING_SAMPLE_MIN};

/// Thresholds governing scope resolution.
///
/// Defaults align with the existing policy generator (0.60 confidence floor)
/// and must not drift without revisiting stored calibration baselines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatingConfig {
    /// Scores strictly above this allow autonomous action
    pub autonomous_threshold: f32,
    /// Scores strictly above this (but not above autonomous) act with notification
    pub notify_threshold: f32,
    /// Environments with fewer samples always escalate
    pub learning_sample_min: u64,
}

impl Default for GatingConfig {
    fn default() -> Self {
        Self {
            autonomous_threshold: 0.85,
            notify_threshold: 0.60,
            learning_sample_min: LEARNING_SAMPLE_MIN,
        }
    }
}

impl GatingConfig {
    /// Validate threshold ordering and bounds.
    pub fn validate(&self) -> GateResult<()> {
        for (field, value) in [
            ("autonomous_threshold", self.autonomous_threshold),
            ("notify_threshold", self.notify_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(GateError::ConfigError(format!(
                    "{} must be in [0.0, 1.0], got {}",
                    field, value
                )));
            }
        }
        if self.notify_threshold >= self.autonomous_threshold {
            return Err(GateError::ConfigError(format!(
                "notify_threshold {} must be below autonomous_threshold {}",
                self.notify_threshold, self.autonomous_threshold
            )));
        }
        Ok(())
    }
}

/// Resolve the autonomy level for a calibration snapshot.
///
/// Decision order, first match wins:
/// 1. Learning-mode or under-sampled environments escalate, regardless of
///    an apparently high score.
/// 2. `score > autonomous_threshold` acts autonomously.
/// 3. `score > notify_threshold` acts with notification.
/// 4. Everything else escalates.
///
/// Thresholds are strict greater-than: a score sitting exactly on a boundary
/// falls to the more cautious bucket.
pub fn resolve_action_scope(state: &CalibrationState, config: &GatingConfig) -> ActionScope {
    if state.sample_count < config.learning_sample_min || state.is_learning_mode {
        return ActionScope::Escalate;
    }

    if state.score > config.autonomous_threshold {
        return ActionScope::Autonomous;
    }

    if state.score > config.notify_threshold {
        return ActionScope::Notify;
    }

    ActionScope::Escalate
}
