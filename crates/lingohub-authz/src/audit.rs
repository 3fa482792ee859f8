//! Audit sink implementations.

use std::sync::Mutex;

use tracing::info;

use lingohub_core::events::{AccessDecision, DomainEvent, EventPayload};
use lingohub_core::traits::AuditSink;

/// Writes every event to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: DomainEvent) {
        match &event.payload {
            EventPayload::Access(access) => match &access.decision {
                AccessDecision::Allowed => {
                    info!(
                        actor = %access.actor_id,
                        capabilities = ?access.capabilities,
                        target = access.target.as_deref().unwrap_or("-"),
                        "access allowed"
                    );
                }
                AccessDecision::Denied { reason } => {
                    info!(
                        actor = %access.actor_id,
                        capabilities = ?access.capabilities,
                        target = access.target.as_deref().unwrap_or("-"),
                        %reason,
                        "access denied"
                    );
                }
            },
            EventPayload::Billing(billing) => {
                info!(event = ?billing, "billing event");
            }
        }
    }
}

/// Captures events in memory. Intended for tests and diagnostics.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<DomainEvent>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every recorded event, in order.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether no events were recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: DomainEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}
