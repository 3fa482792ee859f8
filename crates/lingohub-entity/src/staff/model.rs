//! Staff entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lingohub_core::types::{BranchId, OrganizationId, RoleId, StaffId};

/// A staff account: an authenticated actor with a role and an
/// organization/branch pinning.
///
/// A missing branch means the account operates organization-wide. A
/// missing organization is only valid for platform superusers, which
/// bypass every role and scope check anyway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    /// Unique staff identifier.
    pub id: StaffId,
    /// The organization this account belongs to. `None` only for
    /// platform superusers.
    pub organization_id: Option<OrganizationId>,
    /// Branch assignment. `None` = organization-wide.
    pub branch_id: Option<BranchId>,
    /// The role granting this account its capabilities.
    pub role_id: Option<RoleId>,
    /// Human-readable display name.
    pub display_name: String,
    /// Whether the account is active. Staff are deactivated, never
    /// deleted, to preserve audit history.
    pub is_active: bool,
    /// Platform superuser flag.
    pub is_superuser: bool,
    /// The staff account that created this one.
    pub created_by: Option<StaffId>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Staff {
    /// Create a staff account within an organization.
    pub fn new(
        organization_id: OrganizationId,
        role_id: RoleId,
        display_name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: StaffId::new(),
            organization_id: Some(organization_id),
            branch_id: None,
            role_id: Some(role_id),
            display_name: display_name.into(),
            is_active: true,
            is_superuser: false,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a platform superuser, unbound to any organization.
    pub fn superuser(display_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: StaffId::new(),
            organization_id: None,
            branch_id: None,
            role_id: None,
            display_name: display_name.into(),
            is_active: true,
            is_superuser: true,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Pin this account to a specific branch.
    pub fn in_branch(mut self, branch_id: BranchId) -> Self {
        self.branch_id = Some(branch_id);
        self
    }

    /// Deactivate the account. Deactivated accounts keep their records
    /// for audit history but resolve no capability and see no data.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

/// Data required to create a new staff account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStaff {
    /// The organization the account belongs to.
    pub organization_id: OrganizationId,
    /// Branch assignment, if branch-pinned.
    pub branch_id: Option<BranchId>,
    /// The role to assign.
    pub role_id: RoleId,
    /// Display name.
    pub display_name: String,
    /// The creating staff account.
    pub created_by: Option<StaffId>,
}

/// Fields that can be updated on an existing staff account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStaff {
    /// New branch assignment (`Some(None)` clears the pinning).
    pub branch_id: Option<Option<BranchId>>,
    /// New role.
    pub role_id: Option<RoleId>,
    /// New display name.
    pub display_name: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}
