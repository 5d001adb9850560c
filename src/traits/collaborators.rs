//! Downstream collaborator traits for tool execution, notification and
//! escalation.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GateResult;
use crate::types::{EscalationContext, ToolResult};

/// Executes an already-approved action against the infrastructure.
///
/// Must be safe to call at most once per gated request: implementations must
/// not retry internally in a way that could double-execute side effects
/// without the executor's knowledge. Timeout and retry policy belong to the
/// implementation, not to the gating core.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Invoke an action by name with an opaque payload.
    ///
    /// # Errors
    /// `UnknownTool` for unrecognized action names, `ToolExecutionFailed`
    /// when the downstream action itself fails. Both propagate verbatim to
    /// the caller of the gated executor.
    async fn execute(&self, action: &str, parameters: &Value) -> GateResult<ToolResult>;
}

/// Delivers a human-facing notification.
///
/// Fire-and-forget from the executor's perspective: delivery failures are
/// logged, never propagated as the gated request's failure.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, channel: &str, message: &str) -> GateResult<()>;
}

/// Flags a situation for human review.
///
/// Same best-effort contract as [`Notifier`], but escalation is the sole
/// action taken when a request is refused.
#[async_trait]
pub trait Escalator: Send + Sync {
    async fn escalate(&self, reason: &str, context: &EscalationContext) -> GateResult<()>;
}
