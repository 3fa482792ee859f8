//! Organization entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lingohub_core::types::{OrganizationId, StaffId};

use crate::branch::Branch;

/// A translation center — the billing tenant and unit of data isolation.
///
/// Every branch, staff account, customer, and order belongs to exactly
/// one organization; nothing is ever shared across organizations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Unique organization identifier.
    pub id: OrganizationId,
    /// Display name.
    pub name: String,
    /// The staff account that owns this organization.
    pub owner_id: Option<StaffId>,
    /// Whether the organization is active.
    pub is_active: bool,
    /// When the organization was created.
    pub created_at: DateTime<Utc>,
    /// When the organization was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    /// Create an organization together with its default branch.
    ///
    /// An organization never exists without at least one branch, so the
    /// two records are built in one step and must be stored in the same
    /// transaction by the caller.
    pub fn bootstrap(name: impl Into<String>) -> (Self, Branch) {
        let name = name.into();
        let now = Utc::now();
        let organization = Self {
            id: OrganizationId::new(),
            name: name.clone(),
            owner_id: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let branch = Branch::new_default(organization.id, format!("{name} - Main Branch"));
        (organization, branch)
    }
}

/// Data required to create a new organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrganization {
    /// Display name.
    pub name: String,
    /// Owning staff account, if already known.
    pub owner_id: Option<StaffId>,
}

/// Fields that can be updated on an existing organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrganization {
    /// New display name.
    pub name: Option<String>,
    /// New owner.
    pub owner_id: Option<StaffId>,
    /// New active flag.
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_creates_default_branch() {
        let (org, branch) = Organization::bootstrap("Alpha Center");
        assert_eq!(branch.organization_id, org.id);
        assert!(branch.is_default);
        assert!(branch.name.starts_with("Alpha Center"));
    }
}
