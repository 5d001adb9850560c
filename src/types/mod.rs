//! Domain types for confidence-gated orchestration.

mod action;
mod calibration;
mod drift;

pub use action::{ActionRequest, EscalationContext, GatedOutcome, ToolResult};
pub use calibration::{ActionScope, CalibrationState, LEARNING_SAMPLE_MIN};
pub use drift::{DriftAction, DriftSeverity, DriftStatus};
