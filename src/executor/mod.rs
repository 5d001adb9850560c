//! Gated execution service.
//!
//! Orchestrates one action request end to end: reads the calibration
//! snapshot, resolves the action scope, and executes (or refuses) the action
//! with the side-effect policy that scope demands:
//!
//! - **Autonomous**: execute silently
//! - **Notify**: execute, then notify a human (best-effort)
//! - **Escalate**: refuse, hand the request to a human reviewer
//!
//! The tool is invoked at most once per request and never on the escalate
//! path. Scope is decided once from a single state snapshot; it is not
//! re-checked mid-execution.

mod gate;

pub use gate::{ExecutorConfig, GatedExecutor};
