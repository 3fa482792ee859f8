//! Authorization decisions.
//!
//! Every guarded entry point receives a [`Decision`]: either an allow
//! carrying the scope filter to apply, or a typed denial reason. Denials
//! are ordinary values, never errors — collaborators are responsible for
//! turning them into user-visible messages, redirects, or bot replies.

use serde::{Deserialize, Serialize};

use super::filter::FilterSpec;

/// Why a guarded request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The capability is absent and not implied by a master flag or alias.
    NoPermission,
    /// The organization has no subscription, or its computed status is
    /// not active.
    InactiveSubscription,
    /// The subscription is active but its tariff lacks the feature flag.
    FeatureNotEntitled,
    /// The resource-kind counter is at or above the tariff limit.
    QuotaExceeded,
}

impl DenyReason {
    /// Return the reason as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoPermission => "no_permission",
            Self::InactiveSubscription => "inactive_subscription",
            Self::FeatureNotEntitled => "feature_not_entitled",
            Self::QuotaExceeded => "quota_exceeded",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// The request is allowed; the attached filter bounds what the
    /// collaborator may read or mutate.
    Allow {
        /// Visibility filter for the requested resource kind. `All` when
        /// the request did not name a resource kind.
        scope: FilterSpec,
    },
    /// The request is denied.
    Deny {
        /// Why the request was denied.
        reason: DenyReason,
    },
}

impl Decision {
    /// Construct an allow decision.
    pub fn allow(scope: FilterSpec) -> Self {
        Self::Allow { scope }
    }

    /// Construct a deny decision.
    pub fn deny(reason: DenyReason) -> Self {
        Self::Deny { reason }
    }

    /// Whether this decision permits the action.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow { .. })
    }

    /// The scope filter, if allowed.
    pub fn scope(&self) -> Option<FilterSpec> {
        match self {
            Self::Allow { scope } => Some(*scope),
            Self::Deny { .. } => None,
        }
    }

    /// The denial reason, if denied.
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allow { .. } => None,
            Self::Deny { reason } => Some(*reason),
        }
    }
}
