//! In-memory calibration store.
//!
//! DashMap-backed implementation for tests and development. Each entry
//! replace is atomic; concurrent updates for the same environment race with
//! last-writer-wins semantics, which matches the store contract.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::error::{GateError, GateResult};
use crate::traits::CalibrationStore;
use crate::types::CalibrationState;

/// In-memory calibration store.
///
/// Never produces `StorageUnavailable`; that variant exists for durable
/// backends.
#[derive(Debug, Default)]
pub struct InMemoryCalibrationStore {
    records: DashMap<String, CalibrationState>,
}

impl InMemoryCalibrationStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records. Test lifecycle helper.
    pub fn clear(&self) {
        self.records.clear();
    }
}

#[async_trait]
impl CalibrationStore for InMemoryCalibrationStore {
    async fn get(&self, environment_id: &str) -> GateResult<CalibrationState> {
        if let Some(record) = self.records.get(environment_id) {
            return Ok(record.clone());
        }
        // Unseen environment: synthesize the learning-mode default without
        // persisting it.
        debug!(environment_id, "no calibration record, returning learning default");
        Ok(CalibrationState::learning_default(environment_id))
    }

    async fn update(
        &self,
        environment_id: &str,
        score: f32,
        sample_count: u64,
        recalibration_needed: bool,
    ) -> GateResult<CalibrationState> {
        if !(0.0..=1.0).contains(&score) || score.is_nan() {
            return Err(GateError::InvalidCalibrationValue {
                field: "score".to_string(),
                message: format!("{} outside [0.0, 1.0]", score),
            });
        }

        let state = CalibrationState::new(environment_id, score, sample_count, recalibration_needed);
        debug!(
            environment_id,
            score,
            sample_count,
            recalibration_needed,
            "stored calibration state"
        );
        self.records.insert(environment_id.to_string(), state.clone());
        Ok(state)
    }

    async fn list_all(&self) -> GateResult<Vec<CalibrationState>> {
        Ok(self.records.iter().map(|r| r.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unseen_environment_returns_learning_default() {
        let store = InMemoryCalibrationStore::new();
        let state = store.get("never-seen-before").await.unwrap();
        assert!(state.is_learning_mode);
        assert_eq!(state.sample_count, 0);
        assert!((state.score - 0.5).abs() < f32::EPSILON);
        // The default is synthesized, not persisted.
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_default_is_field_equal_across_reads() {
        let store = InMemoryCalibrationStore::new();
        let first = store.get("unseen").await.unwrap();
        let second = store.get("unseen").await.unwrap();
        assert_eq!(first.environment_id, second.environment_id);
        assert_eq!(first.score, second.score);
        assert_eq!(first.sample_count, second.sample_count);
        assert_eq!(first.is_learning_mode, second.is_learning_mode);
        assert_eq!(first.recalibration_needed, second.recalibration_needed);
    }

    #[tokio::test]
    async fn test_update_then_get_round_trip() {
        let store = InMemoryCalibrationStore::new();
        store.update("test-cluster", 0.88, 500, false).await.unwrap();

        let state = store.get("test-cluster").await.unwrap();
        assert!((state.score - 0.88).abs() < f32::EPSILON);
        assert_eq!(state.sample_count, 500);
        assert!(!state.is_learning_mode);
    }

    #[tokio::test]
    async fn test_learning_mode_recomputed_on_update() {
        let store = InMemoryCalibrationStore::new();

        store.update("small-sample", 0.95, 49, false).await.unwrap();
        assert!(store.get("small-sample").await.unwrap().is_learning_mode);

        store.update("small-sample", 0.95, 50, false).await.unwrap();
        assert!(!store.get("small-sample").await.unwrap().is_learning_mode);
    }

    #[tokio::test]
    async fn test_update_rejects_out_of_range_score() {
        let store = InMemoryCalibrationStore::new();

        let too_high = store.update("bad", 1.5, 100, false).await;
        assert!(matches!(
            too_high,
            Err(GateError::InvalidCalibrationValue { .. })
        ));

        let negative = store.update("bad", -0.1, 100, false).await;
        assert!(negative.is_err());

        let nan = store.update("bad", f32::NAN, 100, false).await;
        assert!(nan.is_err());

        // Rejected writes leave no record behind.
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_last_writer_wins() {
        let store = InMemoryCalibrationStore::new();
        store.update("cluster", 0.70, 100, false).await.unwrap();
        store.update("cluster", 0.90, 200, true).await.unwrap();

        let state = store.get("cluster").await.unwrap();
        assert!((state.score - 0.90).abs() < f32::EPSILON);
        assert_eq!(state.sample_count, 200);
        assert!(state.recalibration_needed);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_list_all() {
        let store = InMemoryCalibrationStore::new();
        store.update("eks-prod", 0.92, 1847, false).await.unwrap();
        store.update("slurm-hpc", 0.72, 500, false).await.unwrap();

        let mut all = store.list_all().await.unwrap();
        all.sort_by(|a, b| a.environment_id.cmp(&b.environment_id));
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].environment_id, "eks-prod");
        assert_eq!(all[1].environment_id, "slurm-hpc");
    }

    #[tokio::test]
    async fn test_clear_for_test_lifecycle() {
        let store = InMemoryCalibrationStore::new();
        store.update("cluster", 0.8, 100, false).await.unwrap();
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.is_empty());
        assert!(store.get("cluster").await.unwrap().is_learning_mode);
    }
}
