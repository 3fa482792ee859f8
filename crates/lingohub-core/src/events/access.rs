//! Authorization decision events.

use serde::{Deserialize, Serialize};

use crate::types::{DenyReason, StaffId};

/// The recorded outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AccessDecision {
    /// The request was allowed.
    Allowed,
    /// The request was denied.
    Denied {
        /// Why the request was denied.
        reason: DenyReason,
    },
}

/// An authorization decision reported to the audit sink.
///
/// Raised for every deny and for every quota-affecting allow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessEvent {
    /// The staff member whose request was checked.
    pub actor_id: StaffId,
    /// The capability names that were checked.
    pub capabilities: Vec<String>,
    /// The gated feature code, when one was checked.
    pub feature: Option<String>,
    /// Free-form description of the target, supplied by the caller.
    pub target: Option<String>,
    /// The outcome.
    pub decision: AccessDecision,
}
