//! Audit sink seam.

use crate::events::DomainEvent;

/// Receives domain events raised by the engine.
///
/// Implementations must be cheap and non-blocking: the engine calls the
/// sink synchronously on the request path. Anything heavier than an
/// in-process handoff belongs behind a queue owned by the implementor.
pub trait AuditSink: Send + Sync {
    /// Record a single event.
    fn record(&self, event: DomainEvent);
}

/// A sink that drops every event. Useful where auditing is not wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuditSink;

impl AuditSink for NullAuditSink {
    fn record(&self, _event: DomainEvent) {}
}
