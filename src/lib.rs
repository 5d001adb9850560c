//! Confidence-Gated Action Orchestration
//!
//! Gates autonomous actions taken by scheduling agents on GPU infrastructure
//! based on how well-calibrated the underlying prediction model currently is
//! for each execution environment.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`CalibrationState`, `ActionScope`, `DriftStatus`, `GatedOutcome`)
//! - Pure decision functions (scope resolution, drift detection, ECE scoring)
//! - Collaborator traits (`CalibrationStore`, `ToolExecutor`, `Notifier`, `Escalator`)
//! - The `GatedExecutor` service that ties a requested action to an autonomy
//!   decision and a side-effect policy
//! - The `CalibrationMonitor` service that tracks drift and flags environments
//!   for recalibration
//!
//! The crate never computes predictions or observes clusters itself; it only
//! decides whether, and how visibly, an already-chosen action may run.
//!
//! # Example
//!
//! ```rust,ignore
//! use confidence_gate::executor::GatedExecutor;
//! use confidence_gate::store::InMemoryCalibrationStore;
//! use confidence_gate::types::ActionRequest;
//!
//! let executor = GatedExecutor::new(store, tools, notifier, escalator);
//! let outcome = executor.execute(ActionRequest::new("eks-prod", "requeue_job", params)).await?;
//! ```

pub mod config;
pub mod drift;
pub mod error;
pub mod executor;
pub mod monitor;
pub mod scope;
pub mod scoring;
pub mod store;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use drift::{detect_drift, DriftConfig};
pub use error::{GateError, GateResult};
pub use executor::{ExecutorConfig, GatedExecutor};
pub use monitor::CalibrationMonitor;
pub use scope::{resolve_action_scope, GatingConfig};
pub use scoring::{calibration_score_to_ece, ece_to_calibration_score};
pub use store::InMemoryCalibrationStore;
pub use types::{
    ActionRequest, ActionScope, CalibrationState, DriftAction, DriftSeverity, DriftStatus,
    EscalationContext, GatedOutcome, ToolResult,
};
