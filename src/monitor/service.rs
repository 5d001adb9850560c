//! Calibration monitor implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::drift::{detect_drift, DriftConfig};
use crate::error::GateResult;
use crate::scoring::{calibration_score_to_ece, ece_to_calibration_score};
use crate::traits::CalibrationStore;
use crate::types::{CalibrationState, DriftStatus};

/// Periodic / on-demand process that tracks calibration drift and maintains
/// per-environment accuracy profiles.
pub struct CalibrationMonitor {
    store: Arc<dyn CalibrationStore>,
    config: DriftConfig,
}

impl CalibrationMonitor {
    /// Create a monitor with the default drift configuration.
    pub fn new(store: Arc<dyn CalibrationStore>) -> Self {
        Self::with_config(store, DriftConfig::default())
    }

    /// Create a monitor with a custom drift configuration.
    pub fn with_config(store: Arc<dyn CalibrationStore>, config: DriftConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Assess drift for an environment from a live ECE measurement.
    ///
    /// On critical drift the environment is flagged for recalibration; score
    /// and sample count stay untouched so the flag never changes autonomy by
    /// itself.
    pub async fn assess(&self, environment_id: &str, current_ece: f32) -> GateResult<DriftStatus> {
        let status = detect_drift(current_ece, self.config.baseline_ece, &self.config);
        debug!(
            environment_id,
            current_ece,
            drift_ratio = status.drift_ratio,
            severity = ?status.severity,
            "assessed calibration drift"
        );

        if status.requires_recalibration() {
            let state = self.store.get(environment_id).await?;
            self.store
                .update(environment_id, state.score, state.sample_count, true)
                .await?;
            warn!(
                environment_id,
                drift_ratio = status.drift_ratio,
                "critical drift, environment flagged for recalibration"
            );
        }

        Ok(status)
    }

    /// Assess drift for an environment with no live metric, deriving the
    /// current ECE from the stored score by inverting the score transform.
    pub async fn assess_stored(&self, environment_id: &str) -> GateResult<DriftStatus> {
        let state = self.store.get(environment_id).await?;
        let current_ece = calibration_score_to_ece(state.score);
        self.assess(environment_id, current_ece).await
    }

    /// Record a fresh accuracy observation for an environment.
    ///
    /// Converts the measured ECE into a calibration score and writes the
    /// replacement profile. A fresh profile supersedes any pending
    /// recalibration flag.
    pub async fn record_observation(
        &self,
        environment_id: &str,
        ece: f32,
        sample_count: u64,
    ) -> GateResult<CalibrationState> {
        let score = ece_to_calibration_score(ece);
        let state = self
            .store
            .update(environment_id, score, sample_count, false)
            .await?;
        info!(
            environment_id,
            ece,
            score,
            sample_count,
            learning_mode = state.is_learning_mode,
            "recorded calibration observation"
        );
        Ok(state)
    }

    /// Current calibration profiles for all monitored environments.
    pub async fn snapshot(&self) -> GateResult<Vec<CalibrationState>> {
        self.store.list_all().await
    }
}
