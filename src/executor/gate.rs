//! Gated executor implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::GateResult;
use crate::scope::{resolve_action_scope, GatingConfig};
use crate::traits::{CalibrationStore, Escalator, Notifier, ToolExecutor};
use crate::types::{ActionRequest, ActionScope, EscalationContext, GatedOutcome};

/// Configuration for the gated executor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Scope resolution thresholds
    pub gating: GatingConfig,
    /// Channel used for moderate-confidence notifications
    pub notify_channel: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            gating: GatingConfig::default(),
            notify_channel: "#gpu-alerts".to_string(),
        }
    }
}

/// Service that ties a requested action to an autonomy decision and a
/// side-effect policy.
///
/// All collaborators are injected; the executor owns no state of its own
/// beyond configuration, so one instance serves concurrent requests for any
/// number of environments.
pub struct GatedExecutor {
    store: Arc<dyn CalibrationStore>,
    tools: Arc<dyn ToolExecutor>,
    notifier: Arc<dyn Notifier>,
    escalator: Arc<dyn Escalator>,
    config: ExecutorConfig,
}

impl GatedExecutor {
    /// Create an executor with default configuration.
    pub fn new(
        store: Arc<dyn CalibrationStore>,
        tools: Arc<dyn ToolExecutor>,
        notifier: Arc<dyn Notifier>,
        escalator: Arc<dyn Escalator>,
    ) -> Self {
        Self::with_config(store, tools, notifier, escalator, ExecutorConfig::default())
    }

    /// Create an executor with custom configuration.
    pub fn with_config(
        store: Arc<dyn CalibrationStore>,
        tools: Arc<dyn ToolExecutor>,
        notifier: Arc<dyn Notifier>,
        escalator: Arc<dyn Escalator>,
        config: ExecutorConfig,
    ) -> Self {
        Self {
            store,
            tools,
            notifier,
            escalator,
            config,
        }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Execute one action request under calibration gating.
    ///
    /// Tool-execution failures surface to the caller unmodified; they are
    /// never reinterpreted as an escalation. Notification and escalation
    /// delivery failures are logged and never alter the outcome.
    pub async fn execute(&self, request: ActionRequest) -> GateResult<GatedOutcome> {
        // One snapshot per request; the decision is never re-checked
        // mid-execution.
        let state = self.store.get(&request.environment_id).await?;
        let scope = resolve_action_scope(&state, &self.config.gating);

        debug!(
            request_id = %request.request_id,
            environment_id = %request.environment_id,
            action = %request.action,
            score = state.score,
            sample_count = state.sample_count,
            ?scope,
            "resolved action scope"
        );

        match scope {
            ActionScope::Escalate => {
                let reason = format!(
                    "Low calibration ({:.2}) for environment {}",
                    state.score, request.environment_id
                );
                let context = EscalationContext::from_request(&request, state.score);
                if let Err(err) = self.escalator.escalate(&reason, &context).await {
                    warn!(
                        request_id = %request.request_id,
                        error = %err,
                        "escalation delivery failed"
                    );
                }
                info!(
                    request_id = %request.request_id,
                    environment_id = %request.environment_id,
                    action = %request.action,
                    "action refused, escalated to human"
                );
                Ok(GatedOutcome::refused(
                    request.request_id,
                    "Escalated to human due to low calibration",
                ))
            }

            ActionScope::Notify => {
                let result = self.tools.execute(&request.action, &request.parameters).await?;
                let message = format!(
                    "Action taken with moderate confidence: {}",
                    request.action
                );
                // Best-effort: the action already ran, a failed notification
                // must not roll it back or fail the request.
                if let Err(err) = self
                    .notifier
                    .notify(&self.config.notify_channel, &message)
                    .await
                {
                    warn!(
                        request_id = %request.request_id,
                        error = %err,
                        "notification delivery failed"
                    );
                }
                Ok(GatedOutcome::completed(
                    request.request_id,
                    ActionScope::Notify,
                    result,
                    true,
                ))
            }

            ActionScope::Autonomous => {
                let result = self.tools.execute(&request.action, &request.parameters).await?;
                Ok(GatedOutcome::completed(
                    request.request_id,
                    ActionScope::Autonomous,
                    result,
                    false,
                ))
            }
        }
    }
}
