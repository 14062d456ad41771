//! Audit event emission
//!
//! The gate and guarded operations emit fire-and-forget events toward an
//! audit collaborator. Emission is best-effort by contract: a failing sink
//! is logged and never blocks or reverses an authorization decision.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::models::ActorId;
use crate::utils::error::Result;

/// Outcome recorded with an audit event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    /// Access was granted
    Granted,
    /// Access was denied after authentication
    Denied,
    /// No principal could be resolved
    Unauthenticated,
}

/// Fire-and-forget audit event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Acting actor, absent for unauthenticated rejections
    pub actor_id: Option<ActorId>,
    /// Operation name the event concerns
    pub action: String,
    /// Decision outcome
    pub outcome: AuditOutcome,
    /// Free-form detail for the audit trail; this is the only place denial
    /// specifics (missing permission, rule fired) may travel
    pub metadata: Option<serde_json::Value>,
    /// Emission timestamp
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    fn new(actor_id: Option<ActorId>, action: &str, outcome: AuditOutcome) -> Self {
        Self {
            actor_id,
            action: action.to_string(),
            outcome,
            metadata: None,
            timestamp: Utc::now(),
        }
    }

    /// Event for a granted sensitive operation
    pub fn granted(actor_id: ActorId, action: &str) -> Self {
        Self::new(Some(actor_id), action, AuditOutcome::Granted)
    }

    /// Event for a post-authentication denial
    pub fn denied(actor_id: ActorId, action: &str) -> Self {
        Self::new(Some(actor_id), action, AuditOutcome::Denied)
    }

    /// Event for a request with no resolvable principal
    pub fn unauthenticated(action: &str) -> Self {
        Self::new(None, action, AuditOutcome::Unauthenticated)
    }

    /// Attach detail metadata
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Destination for audit events
///
/// Implementations must be cheap or internally buffered; the gate calls
/// `record` inline on the request path.
pub trait AuditSink: Send + Sync {
    /// Record one event
    fn record(&self, event: AuditEvent) -> Result<()>;
}

/// Sink that emits events as structured log records
#[derive(Debug, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) -> Result<()> {
        info!(
            actor_id = ?event.actor_id,
            action = %event.action,
            outcome = ?event.outcome,
            metadata = ?event.metadata,
            "authorization audit event"
        );
        Ok(())
    }
}

/// In-memory sink for tests and local inspection
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().clone()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: AuditEvent) -> Result<()> {
        self.events.lock().push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemoryAuditSink::new();
        sink.record(AuditEvent::unauthenticated("patients.list"))
            .unwrap();
        sink.record(AuditEvent::denied(ActorId::new(), "patients.read"))
            .unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].outcome, AuditOutcome::Unauthenticated);
        assert_eq!(events[1].outcome, AuditOutcome::Denied);
        assert!(events[0].actor_id.is_none());
    }

    #[test]
    fn test_event_metadata_attachment() {
        let event = AuditEvent::denied(ActorId::new(), "documents.finalize")
            .with_metadata(serde_json::json!({ "role": "front_desk" }));
        assert_eq!(event.metadata.unwrap()["role"], "front_desk");
    }
}
