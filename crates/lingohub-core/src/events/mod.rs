//! Domain events raised by the authorization engine.
//!
//! The engine raises events through the [`crate::traits::AuditSink`]
//! seam; it owns no event store. Collaborators route events to audit
//! logging, notifications, or analytics.

pub mod access;
pub mod billing;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::StaffId;

pub use access::{AccessDecision, AccessEvent};
pub use billing::BillingEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The staff member who caused the event (if applicable).
    pub actor_id: Option<StaffId>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// An authorization decision event.
    Access(AccessEvent),
    /// A subscription lifecycle event.
    Billing(BillingEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: Option<StaffId>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }
}
