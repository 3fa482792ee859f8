//! Subscription lifecycle events.

use serde::{Deserialize, Serialize};

use crate::types::{OrganizationId, QuotaKind, SubscriptionId};

/// A subscription state change reported to the audit sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BillingEvent {
    /// A subscription became active (payment recorded).
    SubscriptionActivated {
        /// The organization whose subscription changed.
        organization_id: OrganizationId,
        /// The activated subscription.
        subscription_id: SubscriptionId,
    },
    /// A subscription was explicitly cancelled.
    SubscriptionCancelled {
        /// The organization whose subscription changed.
        organization_id: OrganizationId,
        /// The cancelled subscription.
        subscription_id: SubscriptionId,
    },
    /// A new subscription was created to follow an expiring one.
    SubscriptionRenewed {
        /// The organization whose subscription changed.
        organization_id: OrganizationId,
        /// The subscription being renewed.
        previous_subscription_id: SubscriptionId,
        /// The replacement subscription.
        new_subscription_id: SubscriptionId,
    },
    /// A trial subscription was converted to a paid one.
    TrialConverted {
        /// The organization whose subscription changed.
        organization_id: OrganizationId,
        /// The cancelled trial subscription.
        trial_subscription_id: SubscriptionId,
        /// The new paid subscription.
        paid_subscription_id: SubscriptionId,
    },
    /// A unit of quota was reserved through the strict ledger.
    QuotaReserved {
        /// The organization the reservation belongs to.
        organization_id: OrganizationId,
        /// The resource kind reserved.
        kind: QuotaKind,
    },
}
