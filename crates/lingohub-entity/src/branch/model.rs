//! Branch entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lingohub_core::types::{BranchId, OrganizationId};

/// A physical branch location of an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Unique branch identifier.
    pub id: BranchId,
    /// The organization this branch belongs to.
    pub organization_id: OrganizationId,
    /// Display name.
    pub name: String,
    /// Whether this is the organization's default branch, created
    /// together with the organization itself.
    pub is_default: bool,
    /// Whether the branch is active.
    pub is_active: bool,
    /// When the branch was created.
    pub created_at: DateTime<Utc>,
    /// When the branch was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Branch {
    /// Create a new branch within an organization.
    pub fn new(organization_id: OrganizationId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: BranchId::new(),
            organization_id,
            name: name.into(),
            is_default: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create the default branch for a freshly bootstrapped organization.
    pub fn new_default(organization_id: OrganizationId, name: impl Into<String>) -> Self {
        let mut branch = Self::new(organization_id, name);
        branch.is_default = true;
        branch
    }
}

/// Data required to create a new branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBranch {
    /// The organization the branch belongs to.
    pub organization_id: OrganizationId,
    /// Display name.
    pub name: String,
}
