//! Guarded access requests.

use serde::{Deserialize, Serialize};

use lingohub_core::types::{QuotaKind, ResourceKind};

/// How multiple capabilities combine into one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationMode {
    /// Every listed capability must be granted.
    AllOf,
    /// At least one listed capability suffices.
    AnyOf,
}

/// A request to perform a guarded action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequest {
    /// Capability names to check.
    pub capabilities: Vec<String>,
    /// How the capabilities combine.
    pub mode: CombinationMode,
    /// Feature code the organization's tariff must include.
    pub feature: Option<String>,
    /// Quota consumed by the action, for resource creations.
    pub quota: Option<QuotaKind>,
    /// Resource kind to attach a visibility scope for.
    pub scope_of: Option<ResourceKind>,
    /// Free-form target description for audit events.
    pub target: Option<String>,
}

impl AccessRequest {
    /// A request where every capability must be granted.
    pub fn all_of<I, S>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            capabilities: capabilities.into_iter().map(Into::into).collect(),
            mode: CombinationMode::AllOf,
            feature: None,
            quota: None,
            scope_of: None,
            target: None,
        }
    }

    /// A request where any one capability suffices.
    pub fn any_of<I, S>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut request = Self::all_of(capabilities);
        request.mode = CombinationMode::AnyOf;
        request
    }

    /// A request checking a single capability.
    pub fn capability(capability: impl Into<String>) -> Self {
        Self::all_of([capability.into()])
    }

    /// Gate on a tariff feature, builder style.
    pub fn with_feature(mut self, code: impl Into<String>) -> Self {
        self.feature = Some(code.into());
        self
    }

    /// Gate on a creation quota, builder style.
    pub fn with_quota(mut self, kind: QuotaKind) -> Self {
        self.quota = Some(kind);
        self
    }

    /// Attach a visibility scope for `kind` to the allow, builder style.
    pub fn scoped_to(mut self, kind: ResourceKind) -> Self {
        self.scope_of = Some(kind);
        self
    }

    /// Describe the target for audit events, builder style.
    pub fn describing(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}
