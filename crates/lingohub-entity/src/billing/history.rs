//! Subscription history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lingohub_core::types::{StaffId, SubscriptionId};

/// What happened to a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionAction {
    /// The subscription record was created.
    Created,
    /// Payment was recorded and the subscription became active.
    Activated,
    /// The subscription was explicitly cancelled.
    Cancelled,
    /// A follow-up subscription was created for renewal.
    Renewed,
    /// A trial was converted to a paid subscription.
    TrialConverted,
}

/// A historical record of a subscription state change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionHistoryEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// The subscription the entry belongs to.
    pub subscription_id: SubscriptionId,
    /// What happened.
    pub action: SubscriptionAction,
    /// Human-readable description.
    pub description: String,
    /// The staff account that performed the action, if any.
    pub performed_by: Option<StaffId>,
    /// When the change happened.
    pub timestamp: DateTime<Utc>,
}

impl SubscriptionHistoryEntry {
    /// Create a new history entry stamped with the current time.
    pub fn new(
        subscription_id: SubscriptionId,
        action: SubscriptionAction,
        description: impl Into<String>,
        performed_by: Option<StaffId>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subscription_id,
            action,
            description: description.into(),
            performed_by,
            timestamp: Utc::now(),
        }
    }
}
