//! Per-resource-kind scope capabilities.

use serde::{Deserialize, Serialize};

/// The capabilities that control visibility breadth for one resource
/// kind.
///
/// Order visibility is deliberately decoupled from branch-administration
/// visibility: holding `can_view_all_orders` never requires an unrelated
/// branches capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeRule {
    /// Grants organization-wide visibility.
    pub view_all: String,
    /// Grants visibility of the staff member's own records only.
    pub view_own: Option<String>,
    /// Grants visibility within the member's pinned branch.
    pub view_branch: Option<String>,
}
