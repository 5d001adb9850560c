//! Calibration store trait.

use async_trait::async_trait;

use crate::error::GateResult;
use crate::types::CalibrationState;

/// Per-environment calibration state storage.
///
/// Backing storage is pluggable: an in-memory map for tests and development,
/// a durable store in production. Records are long-lived and never deleted;
/// absence means "never seen".
///
/// # Example
///
/// ```rust,ignore
/// use confidence_gate::store::InMemoryCalibrationStore;
/// use confidence_gate::traits::CalibrationStore;
///
/// let store = InMemoryCalibrationStore::new();
/// let state = store.update("eks-prod", 0.88, 500, false).await?;
/// assert!(!state.is_learning_mode);
/// ```
#[async_trait]
pub trait CalibrationStore: Send + Sync {
    /// Get the current state for an environment.
    ///
    /// Unseen identifiers yield a synthesized learning-mode default; the
    /// default is not persisted. Only storage-layer failures error.
    async fn get(&self, environment_id: &str) -> GateResult<CalibrationState>;

    /// Replace the full record for an environment.
    ///
    /// Recomputes `is_learning_mode` from the sample count, stamps
    /// `last_updated`, and stores the replacement atomically. Last writer
    /// wins; there is no merge of concurrent updates.
    ///
    /// # Errors
    /// `InvalidCalibrationValue` if `score` is outside [0.0, 1.0] or NaN.
    async fn update(
        &self,
        environment_id: &str,
        score: f32,
        sample_count: u64,
        recalibration_needed: bool,
    ) -> GateResult<CalibrationState>;

    /// All currently-stored records, in unspecified order.
    async fn list_all(&self) -> GateResult<Vec<CalibrationState>>;
}
