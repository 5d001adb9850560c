//! Collaborator trait boundaries.
//!
//! Everything outside the gating core (storage, tool transport, notification
//! delivery, escalation delivery) is reached through these traits so backends
//! stay pluggable and tests can observe every call.

mod collaborators;
mod store;

pub use collaborators::{Escalator, Notifier, ToolExecutor};
pub use store::CalibrationStore;
