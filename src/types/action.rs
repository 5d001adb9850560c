//! Action request, tool result and gated outcome types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::ActionScope;

/// One proposed action for an environment, produced by an upstream decision
/// layer and submitted to the gated executor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Correlation id for this request
    pub request_id: Uuid,
    /// Environment the action targets
    pub environment_id: String,
    /// Opaque action identifier (e.g. "tool_requeue_job")
    pub action: String,
    /// Opaque action payload, passed through to the tool executor
    pub parameters: Value,
}

impl ActionRequest {
    /// Create a request with a fresh correlation id.
    pub fn new(
        environment_id: impl Into<String>,
        action: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            environment_id: environment_id.into(),
            action: action.into(),
            parameters,
        }
    }
}

/// Result from a tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    pub data: Option<Value>,
    pub error: Option<String>,
}

impl ToolResult {
    /// Successful result with a payload.
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Successful result without a payload.
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    /// Failed result with an error message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Context handed to the escalation collaborator so a human can review the
/// action that was refused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationContext {
    pub environment_id: String,
    pub calibration_score: f32,
    pub action: String,
    pub parameters: Value,
}

impl EscalationContext {
    /// Build context from the refused request and the score that refused it.
    pub fn from_request(request: &ActionRequest, calibration_score: f32) -> Self {
        Self {
            environment_id: request.environment_id.clone(),
            calibration_score,
            action: request.action.clone(),
            parameters: request.parameters.clone(),
        }
    }
}

/// Outcome of one gated execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatedOutcome {
    /// Correlation id of the originating request
    pub request_id: Uuid,
    /// Whether the action was executed
    pub executed: bool,
    /// Scope the request was resolved to
    pub action_scope: ActionScope,
    /// Whether a human was notified alongside execution
    pub notified_human: bool,
    /// Tool result, present when the action ran
    pub result: Option<ToolResult>,
    /// Present whenever `executed` is false
    pub reason: Option<String>,
    /// When the scope decision was made
    pub decided_at: DateTime<Utc>,
}

impl GatedOutcome {
    /// Outcome for a refused request (escalation branch).
    pub fn refused(request_id: Uuid, reason: impl Into<String>) -> Self {
        Self {
            request_id,
            executed: false,
            action_scope: ActionScope::Escalate,
            notified_human: false,
            result: None,
            reason: Some(reason.into()),
            decided_at: Utc::now(),
        }
    }

    /// Outcome for an executed request (notify or autonomous branch).
    pub fn completed(
        request_id: Uuid,
        action_scope: ActionScope,
        result: ToolResult,
        notified_human: bool,
    ) -> Self {
        Self {
            request_id,
            executed: true,
            action_scope,
            notified_human,
            result: Some(result),
            reason: None,
            decided_at: Utc::now(),
        }
    }
}
